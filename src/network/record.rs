use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::activation::activation::Activation;
use crate::error::NetworkError;
use crate::layers::dense::Layer;
use crate::network::network::Network;

/// The persisted shape of a [`Network`].
///
/// Field names and ordering match the JSON the engine has always produced:
/// `_name` first, then `inputCount`, then the layer list. Transient layer
/// state (`outputs`, `deltas`) is never persisted.
///
/// `inputCount` is an `Option` so that its absence surfaces as
/// [`NetworkError::UndefinedField`] during [`Network::from_record`] instead
/// of a generic parse failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkRecord {
    #[serde(rename = "_name")]
    pub name: String,
    #[serde(rename = "inputCount")]
    pub input_count: Option<usize>,
    #[serde(default)]
    pub layers: Vec<LayerRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayerRecord {
    #[serde(rename = "nodeCount", alias = "neuronCount")]
    pub node_count: usize,
    pub activation: ActivationRecord,
    /// One row per neuron, `input_width + 1` wide; last column is the bias.
    #[serde(alias = "neurons")]
    pub weights: Vec<Vec<f64>>,
}

/// Activations are persisted as a by-name reference, resolved against the
/// built-in registry on load.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivationRecord {
    pub name: String,
}

impl Network {
    /// Snapshot of this network in its persisted shape.
    pub fn to_record(&self) -> NetworkRecord {
        NetworkRecord {
            name: self.name.clone(),
            input_count: Some(self.input_count),
            layers: self
                .layers
                .iter()
                .map(|layer| LayerRecord {
                    node_count: layer.node_count,
                    activation: ActivationRecord {
                        name: layer.activation.name().to_string(),
                    },
                    weights: layer.weights.clone(),
                })
                .collect(),
        }
    }

    /// Rebuilds a network from its persisted shape.
    ///
    /// Activation references are resolved by name against the registry;
    /// weight rows are validated against the preceding layer's width so a
    /// malformed record fails here rather than mid-forward-pass.
    pub fn from_record(record: NetworkRecord) -> Result<Network, NetworkError> {
        let input_count = record
            .input_count
            .ok_or(NetworkError::UndefinedField("inputCount"))?;

        let mut network = Network::new(input_count, record.name);

        for layer_record in record.layers {
            let activation = Activation::from_name(&layer_record.activation.name)?;
            let mut layer = Layer::new(layer_record.node_count, activation)?;

            if layer_record.weights.len() != layer.node_count {
                return Err(NetworkError::DimensionMismatch {
                    expected: layer.node_count,
                    got: layer_record.weights.len(),
                });
            }

            let expected_width = network.layers.last().map_or(input_count, |prev| prev.node_count) + 1;
            for row in &layer_record.weights {
                if row.len() != expected_width {
                    return Err(NetworkError::DimensionMismatch {
                        expected: expected_width,
                        got: row.len(),
                    });
                }
            }

            layer.weights = layer_record.weights;
            network.layers.push(layer);
        }

        debug!(
            network = %network.name,
            layers = network.layers.len(),
            "loaded network from record"
        );
        Ok(network)
    }

    /// Pretty-printed JSON snapshot of the network.
    pub fn to_json_string(&self) -> Result<String, NetworkError> {
        Ok(serde_json::to_string_pretty(&self.to_record())?)
    }

    /// Rebuilds a network from a JSON snapshot.
    pub fn from_json_str(json: &str) -> Result<Network, NetworkError> {
        Network::from_record(serde_json::from_str(json)?)
    }

    /// Serializes the network to a pretty-printed JSON file.
    pub fn save_json(&self, path: impl AsRef<Path>) -> Result<(), NetworkError> {
        let file = File::create(path)?;
        let writer = BufWriter::new(file);
        serde_json::to_writer_pretty(writer, &self.to_record())?;
        Ok(())
    }

    /// Deserializes a network from a JSON file previously written by
    /// [`save_json`](Network::save_json).
    pub fn load_json(path: impl AsRef<Path>) -> Result<Network, NetworkError> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        Network::from_record(serde_json::from_reader(reader)?)
    }
}
