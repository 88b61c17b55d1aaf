//! Capability traits implemented by the engine crate.

pub mod predictor;

pub use predictor::IPredictor;
