use std::f64::consts::E;

use crate::error::NetworkError;

/// The closed set of activation functions this engine supports.
///
/// Activations are plain values: no state beyond the variant itself, freely
/// copied and shared across any number of layers and networks. Persisted
/// records refer to them by [`name`](Activation::name) and resolve through
/// [`from_name`](Activation::from_name); an unknown name is rejected rather
/// than silently producing an undefined function.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    Sigmoid,
    Tanh,
    LeakyRelu,
    BinaryStep,
}

impl Activation {
    /// Resolves a persisted activation name against the registry.
    pub fn from_name(name: &str) -> Result<Activation, NetworkError> {
        match name {
            "sigmoid" => Ok(Activation::Sigmoid),
            "tanh" => Ok(Activation::Tanh),
            "leakyRelu" => Ok(Activation::LeakyRelu),
            "binaryStep" => Ok(Activation::BinaryStep),
            other => Err(NetworkError::UnknownActivation(other.to_string())),
        }
    }

    /// The name this activation is persisted under.
    pub fn name(&self) -> &'static str {
        match self {
            Activation::Sigmoid => "sigmoid",
            Activation::Tanh => "tanh",
            Activation::LeakyRelu => "leakyRelu",
            Activation::BinaryStep => "binaryStep",
        }
    }

    /// Element-wise activation applied to a neuron's weighted sum.
    pub fn output(&self, x: f64) -> f64 {
        match self {
            Activation::Sigmoid => 1.0 / (1.0 + E.powf(-x)),
            Activation::Tanh => x.tanh(),
            Activation::LeakyRelu => if x > 0.0 { x } else { 0.01 * x },
            Activation::BinaryStep => if x > 0.0 { 1.0 } else { 0.0 },
        }
    }

    /// Derivative of the activation, evaluated at the activation's **own
    /// prior output** `y`, not the raw pre-activation value.
    ///
    /// For `Sigmoid` (`y(1-y)`) and `Tanh` (`1-y²`) this is the standard
    /// chain-rule simplification valid for those two functions.
    ///
    /// `BinaryStep` returns a constant `1.0`. The true derivative is zero
    /// almost everywhere, which would stall gradient descent entirely; the
    /// substitution is a deliberate contract of this engine, not a bug.
    pub fn derivative(&self, y: f64) -> f64 {
        match self {
            Activation::Sigmoid => y * (1.0 - y),
            Activation::Tanh => 1.0 - y * y,
            Activation::LeakyRelu => if y > 0.0 { 1.0 } else { 0.01 },
            Activation::BinaryStep => 1.0,
        }
    }
}
