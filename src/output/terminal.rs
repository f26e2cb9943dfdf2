// Colored terminal output for verdicts.
//
// Fake renders red, Real green, Unsure yellow, mirroring the three
// styles of the web form.

use colored::{ColoredString, Colorize};

use crate::decision::Tone;
use crate::handler::VerdictView;

/// Display a verdict in the terminal.
pub fn display_verdict(view: &VerdictView) {
    println!("\n{}", view.heading.bold());
    println!();
    println!("  {}", colorize_headline(&view.headline, view.tone));

    if let Some(p) = view.probability {
        println!("  Fake probability: {:.2}", p);
    }

    println!("\n  {}", view.caption.dimmed());
}

/// Colorize a headline by its tone.
fn colorize_headline(headline: &str, tone: Tone) -> ColoredString {
    match tone {
        Tone::Error => headline.red().bold(),
        Tone::Success => headline.green().bold(),
        Tone::Warning => headline.yellow().bold(),
    }
}
