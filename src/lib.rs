pub mod activation;
pub mod error;
pub mod layers;
pub mod network;

// Convenience re-exports
pub use activation::activation::Activation;
pub use error::NetworkError;
pub use layers::dense::Layer;
pub use network::network::{Network, Prediction, DEFAULT_LEARNING_RATE};
pub use network::record::NetworkRecord;
