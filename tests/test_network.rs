// Tests for network construction, layer appending, and weight
// initialization.

use dendrite::{Activation, Network, NetworkError};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn add_layer_rejects_zero_nodes() {
    let mut network = Network::new(2, "bad");
    let err = network.add_layer(0, Activation::Sigmoid).unwrap_err();
    assert!(matches!(err, NetworkError::InvalidArgument(_)));
}

#[test]
fn add_layer_is_chainable() {
    let mut network = Network::new(2, "chain");
    network
        .add_layer(3, Activation::Tanh)
        .unwrap()
        .add_layer(1, Activation::Sigmoid)
        .unwrap();
    assert_eq!(network.layers.len(), 2);
    assert_eq!(network.layers[0].node_count, 3);
    assert_eq!(network.layers[1].activation, Activation::Sigmoid);
}

#[test]
fn predict_on_empty_network_fails() {
    let mut network = Network::new(2, "empty");
    let err = network.predict(&[0.0, 0.0]).unwrap_err();
    assert!(matches!(err, NetworkError::InvalidArgument(_)));
}

#[test]
fn predict_before_weight_initialization_fails() {
    let mut network = Network::new(2, "uninitialized");
    network.add_layer(1, Activation::Sigmoid).unwrap();
    let err = network.predict(&[0.0, 0.0]).unwrap_err();
    assert!(matches!(err, NetworkError::InvalidArgument(_)));
}

#[test]
fn train_before_weight_initialization_fails() {
    let mut network = Network::new(2, "uninitialized");
    network.add_layer(1, Activation::Sigmoid).unwrap();
    let err = network.train(&[0.0, 0.0], &[1.0], 0.1).unwrap_err();
    assert!(matches!(err, NetworkError::InvalidArgument(_)));
}

#[test]
fn randomize_weights_shapes_and_range() {
    let mut network = Network::new(3, "shapes");
    network
        .add_layer(4, Activation::Sigmoid)
        .unwrap()
        .add_layer(2, Activation::Tanh)
        .unwrap()
        .randomize_weights();

    // Layer 0: 4 neurons, 3 inputs + bias. Layer 1: 2 neurons, 4 + bias.
    assert_eq!(network.layers[0].weights.len(), 4);
    for row in &network.layers[0].weights {
        assert_eq!(row.len(), 4);
    }
    assert_eq!(network.layers[1].weights.len(), 2);
    for row in &network.layers[1].weights {
        assert_eq!(row.len(), 5);
    }

    for layer in &network.layers {
        for row in &layer.weights {
            for &w in row {
                assert!((-1.0..1.0).contains(&w), "weight {w} outside [-1, 1)");
            }
        }
    }
}

#[test]
fn seeded_randomization_is_reproducible() {
    let mut a = Network::new(2, "a");
    a.add_layer(2, Activation::Sigmoid).unwrap();
    a.randomize_weights_with(&mut StdRng::seed_from_u64(7));

    let mut b = Network::new(2, "b");
    b.add_layer(2, Activation::Sigmoid).unwrap();
    b.randomize_weights_with(&mut StdRng::seed_from_u64(7));

    assert_eq!(a.layers[0].weights, b.layers[0].weights);
}

#[test]
fn outputs_and_deltas_are_presized() {
    let mut network = Network::new(2, "presized");
    network.add_layer(3, Activation::Sigmoid).unwrap();
    assert_eq!(network.layers[0].outputs.len(), 3);
    assert_eq!(network.layers[0].deltas.len(), 3);
}
