pub mod network;
pub mod record;

pub use network::{Network, Prediction, DEFAULT_LEARNING_RATE};
pub use record::{ActivationRecord, LayerRecord, NetworkRecord};
