// Fake-posting classifiers — trait-based abstraction for swappable backends.
//
// The Classifier trait defines the interface. OnnxClassifier runs a local
// model; RemoteClassifier calls a model-serving endpoint. The request
// handler only ever sees `&dyn Classifier`.

pub mod model_dir;
pub mod onnx;
pub mod remote;
pub mod traits;
