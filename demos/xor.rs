use dendrite::{Activation, Network, NetworkError};

fn main() -> Result<(), NetworkError> {
    let mut network = Network::new(2, "xor");
    network
        .add_layer(2, Activation::Sigmoid)?
        .add_layer(1, Activation::Sigmoid)?
        .randomize_weights();

    let samples: [([f64; 2], f64); 4] = [
        ([0.0, 0.0], 0.0),
        ([0.0, 1.0], 1.0),
        ([1.0, 0.0], 1.0),
        ([1.0, 1.0], 0.0),
    ];

    let learning_rate = 0.1;
    let epochs = 10000;

    for epoch in 0..epochs {
        for (inputs, target) in &samples {
            network.train(inputs, &[*target], learning_rate)?;
        }

        if epoch % 1000 == 0 {
            let mse: f64 = samples
                .iter()
                .map(|(inputs, target)| {
                    let out = network.predict(inputs).unwrap().scalar().unwrap();
                    (out - target).powi(2)
                })
                .sum::<f64>()
                / samples.len() as f64;
            println!("Epoch {epoch}: mse = {mse:.6}");
        }
    }

    for (inputs, target) in &samples {
        let out = network.predict(inputs)?.scalar().unwrap();
        println!("Input: {inputs:?} -> Output: {out:.4} (target {target})");
    }

    Ok(())
}
