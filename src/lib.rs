// Fakejob: fake job posting detection
//
// This is the library root. A submission flows
// posting -> normalize -> classifier -> decision -> handler's VerdictView.

pub mod classifier;
pub mod config;
pub mod decision;
pub mod handler;
pub mod normalize;
pub mod output;
pub mod posting;
pub mod status;

#[cfg(feature = "web")]
pub mod web;
