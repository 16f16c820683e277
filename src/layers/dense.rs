use crate::activation::activation::Activation;
use crate::error::NetworkError;

/// One fully-connected layer: a set of neurons all consuming the same input
/// vector and sharing one activation function.
///
/// `weights` holds one row per neuron, `input_width + 1` columns wide; the
/// extra last column is the neuron's bias weight. Rows stay empty until
/// `Network::randomize_weights` fills them or a persisted record supplies
/// them.
///
/// `outputs` and `deltas` are transient working state, pre-sized to
/// `node_count` and fully rewritten by every forward/backward pass. They are
/// never cleared between passes and are not persisted.
#[derive(Debug, Clone)]
pub struct Layer {
    pub node_count: usize,
    pub activation: Activation,
    pub weights: Vec<Vec<f64>>,
    pub outputs: Vec<f64>,
    pub deltas: Vec<f64>,
}

impl Layer {
    pub fn new(node_count: usize, activation: Activation) -> Result<Layer, NetworkError> {
        if node_count == 0 {
            return Err(NetworkError::InvalidArgument(
                "a layer must have a positive number of nodes".to_string(),
            ));
        }

        Ok(Layer {
            node_count,
            activation,
            weights: Vec::new(),
            outputs: vec![0.0; node_count],
            deltas: vec![0.0; node_count],
        })
    }
}
