use rand::Rng;
use tracing::debug;

use crate::activation::activation::Activation;
use crate::error::NetworkError;
use crate::layers::dense::Layer;

/// Learning rate used by callers that have no opinion of their own.
pub const DEFAULT_LEARNING_RATE: f64 = 0.01;

/// Result of a [`Network::predict`] call.
///
/// A network whose final layer has a single neuron answers with a bare
/// scalar; wider output layers answer with the full output vector. Callers
/// relying on this shape contract can match on the variant instead of
/// unwrapping a one-element vector.
#[derive(Debug, Clone, PartialEq)]
pub enum Prediction {
    Scalar(f64),
    Vector(Vec<f64>),
}

impl Prediction {
    /// The scalar value, if the output layer had exactly one neuron.
    pub fn scalar(&self) -> Option<f64> {
        match self {
            Prediction::Scalar(value) => Some(*value),
            Prediction::Vector(_) => None,
        }
    }

    /// All output values, regardless of shape.
    pub fn values(&self) -> &[f64] {
        match self {
            Prediction::Scalar(value) => std::slice::from_ref(value),
            Prediction::Vector(values) => values,
        }
    }
}

/// A feedforward network: an ordered stack of fully-connected layers plus
/// the three algorithms that drive it (forward propagation, backward error
/// propagation, gradient-descent weight update).
///
/// Layers are only ever appended, via [`add_layer`](Network::add_layer), so
/// width invariants are enforced incrementally against the immediately
/// preceding layer. Weights must be filled by
/// [`randomize_weights`](Network::randomize_weights) or loaded from a
/// persisted record before the first predict/train call.
///
/// All mutating operations take `&mut self`; exclusive access per network
/// instance is the whole concurrency model.
#[derive(Debug, Clone)]
pub struct Network {
    pub name: String,
    pub input_count: usize,
    pub layers: Vec<Layer>,
}

impl Network {
    pub fn new(input_count: usize, name: impl Into<String>) -> Network {
        Network {
            name: name.into(),
            input_count,
            layers: Vec::new(),
        }
    }

    /// Appends a fully-connected layer of `node_count` neurons. Chainable.
    ///
    /// The layer's weight rows stay empty until `randomize_weights` runs or
    /// weights are loaded from a record.
    pub fn add_layer(
        &mut self,
        node_count: usize,
        activation: Activation,
    ) -> Result<&mut Network, NetworkError> {
        self.layers.push(Layer::new(node_count, activation)?);
        Ok(self)
    }

    /// Width of the input vector feeding layer `i`: the previous layer's
    /// node count, or the network's declared input count for layer 0.
    fn input_width(&self, i: usize) -> usize {
        if i == 0 {
            self.input_count
        } else {
            self.layers[i - 1].node_count
        }
    }

    /// Fills every weight row, bias column included, with values drawn
    /// uniformly from [-1, 1) using the thread-local RNG. Chainable.
    pub fn randomize_weights(&mut self) -> &mut Network {
        self.randomize_weights_with(&mut rand::thread_rng())
    }

    /// Same as [`randomize_weights`](Network::randomize_weights) but drawing
    /// from a caller-supplied RNG, so initialization can be reproduced.
    pub fn randomize_weights_with<R: Rng>(&mut self, rng: &mut R) -> &mut Network {
        for i in 0..self.layers.len() {
            // One extra column per neuron for the bias weight.
            let weights_count = self.input_width(i) + 1;
            let layer = &mut self.layers[i];

            layer.weights = (0..layer.node_count)
                .map(|_| {
                    (0..weights_count)
                        .map(|_| rng.gen::<f64>() * 2.0 - 1.0)
                        .collect()
                })
                .collect();
        }

        debug!(
            network = %self.name,
            layers = self.layers.len(),
            "randomized weights"
        );
        self
    }

    /// Runs a forward pass and returns the output layer's result, shaped per
    /// the [`Prediction`] contract.
    pub fn predict(&mut self, inputs: &[f64]) -> Result<Prediction, NetworkError> {
        self.forward(inputs)?;
        Ok(self.output())
    }

    /// The output layer's result from the most recent forward pass.
    ///
    /// Meaningful only after [`predict`](Network::predict) or
    /// [`train`](Network::train) has run at least once.
    pub fn output(&self) -> Prediction {
        let outputs = &self.layers[self.layers.len() - 1].outputs;
        if outputs.len() == 1 {
            Prediction::Scalar(outputs[0])
        } else {
            Prediction::Vector(outputs.clone())
        }
    }

    /// One gradient-descent step: forward, backward, weight update.
    ///
    /// All validation happens before any weight is touched, so a failed call
    /// leaves the network exactly as it was.
    pub fn train(
        &mut self,
        inputs: &[f64],
        actuals: &[f64],
        learning_rate: f64,
    ) -> Result<(), NetworkError> {
        self.check_topology()?;
        if inputs.len() != self.input_count {
            return Err(NetworkError::DimensionMismatch {
                expected: self.input_count,
                got: inputs.len(),
            });
        }
        let output_width = self.layers[self.layers.len() - 1].node_count;
        if actuals.len() != output_width {
            return Err(NetworkError::DimensionMismatch {
                expected: output_width,
                got: actuals.len(),
            });
        }

        self.forward(inputs)?;
        self.backward(actuals);
        self.update_weights(inputs, learning_rate);
        Ok(())
    }

    /// Forward propagation, input layer to output layer. Each layer consumes
    /// the raw `inputs` (layer 0) or the previous layer's just-computed
    /// outputs.
    ///
    /// Lengths are validated here at the boundary; the inner loops assume
    /// well-formed weight rows and do not re-check.
    pub fn forward(&mut self, inputs: &[f64]) -> Result<(), NetworkError> {
        self.check_topology()?;
        if inputs.len() != self.input_count {
            return Err(NetworkError::DimensionMismatch {
                expected: self.input_count,
                got: inputs.len(),
            });
        }

        for i in 0..self.layers.len() {
            let (before, rest) = self.layers.split_at_mut(i);
            let layer = &mut rest[0];
            let input_to_layer: &[f64] = if i == 0 { inputs } else { &before[i - 1].outputs };
            let width = input_to_layer.len();

            for j in 0..layer.node_count {
                let weights = &layer.weights[j];

                // The bias sits in the last column; start the accumulator
                // there and sum the weighted inputs on top.
                let mut value = weights[width];
                for k in 0..width {
                    value += input_to_layer[k] * weights[k];
                }

                layer.outputs[j] = layer.activation.output(value);
            }
        }

        Ok(())
    }

    /// Backward error propagation, output layer to input layer. Reads the
    /// outputs populated by the forward pass on the same inputs and rewrites
    /// every layer's `deltas`.
    fn backward(&mut self, actuals: &[f64]) {
        for i in (0..self.layers.len()).rev() {
            let (head, tail) = self.layers.split_at_mut(i + 1);
            let layer = &mut head[i];

            if let Some(next) = tail.first() {
                // Hidden layer: each neuron's error is accumulated from the
                // next layer's deltas through the column of weights that
                // read this neuron's output (transposed access).
                for j in 0..layer.node_count {
                    let mut error = 0.0;
                    for k in 0..next.node_count {
                        error += next.weights[k][j] * next.deltas[k];
                    }
                    layer.deltas[j] = error * layer.activation.derivative(layer.outputs[j]);
                }
            } else {
                // Output layer: error is the distance to the target.
                for j in 0..layer.node_count {
                    let error = layer.outputs[j] - actuals[j];
                    layer.deltas[j] = error * layer.activation.derivative(layer.outputs[j]);
                }
            }
        }
    }

    /// Applies one gradient-descent step to every weight, bias columns
    /// included.
    ///
    /// Per-layer updates are independent given the deltas and the outputs of
    /// the forward pass they came from; nothing recomputes outputs between
    /// forward and here, so every layer reads its pre-update view.
    fn update_weights(&mut self, inputs: &[f64], learning_rate: f64) {
        for i in 0..self.layers.len() {
            let (before, rest) = self.layers.split_at_mut(i);
            let layer = &mut rest[0];
            let input_to_layer: &[f64] = if i == 0 { inputs } else { &before[i - 1].outputs };
            let width = input_to_layer.len();

            for j in 0..layer.node_count {
                let delta = layer.deltas[j];
                let weights = &mut layer.weights[j];

                for k in 0..width {
                    weights[k] -= learning_rate * delta * input_to_layer[k];
                }
                weights[width] -= learning_rate * delta;
            }
        }
    }

    /// Predict/train precondition: at least one layer, weights filled.
    fn check_topology(&self) -> Result<(), NetworkError> {
        if self.layers.is_empty() {
            return Err(NetworkError::InvalidArgument(
                "network has no layers; call add_layer() first".to_string(),
            ));
        }
        if self.layers.iter().any(|layer| layer.weights.is_empty()) {
            return Err(NetworkError::InvalidArgument(
                "weights are not initialized; call randomize_weights() or load a saved network"
                    .to_string(),
            ));
        }
        Ok(())
    }
}
