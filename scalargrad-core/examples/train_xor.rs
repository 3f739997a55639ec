//! Trains a small MLP on XOR with a hand-rolled gradient-descent loop.
//!
//! The engine itself has no optimizer; this shows the intended collaborator
//! pattern: zero grads, build the loss graph, backward, then descend over
//! the `parameters()` sequence.
//!
//! Run with: `cargo run --example train_xor`

use rand::rngs::StdRng;
use rand::SeedableRng;
use scalargrad_core::nn::{Mlp, Module};
use scalargrad_core::{ScalarGradError, Value};

fn main() -> Result<(), ScalarGradError> {
    env_logger::init();

    let samples: [([f64; 2], f64); 4] = [
        ([0.0, 0.0], 0.0),
        ([0.0, 1.0], 1.0),
        ([1.0, 0.0], 1.0),
        ([1.0, 1.0], 0.0),
    ];

    let mut rng = StdRng::seed_from_u64(1337);
    let mlp = Mlp::new(2, &[8, 1], &mut rng);
    let learning_rate = 0.05;

    for epoch in 0..200 {
        mlp.zero_grad();

        // Summed squared error over the four samples, one graph per epoch.
        let mut loss = Value::new(0.0);
        for (input, target) in &samples {
            let input = [Value::new(input[0]), Value::new(input[1])];
            let output = mlp.forward(&input)?;
            loss = &loss + &(&output[0] - *target).pow(2.0);
        }

        loss.backward();
        for param in mlp.parameters() {
            param.set_data(param.data() - learning_rate * param.grad());
        }

        if epoch % 20 == 0 {
            println!("epoch {epoch:>3}  loss {:.6}", loss.data());
        }
    }

    println!("---");
    for (input, target) in &samples {
        let input_values = [Value::new(input[0]), Value::new(input[1])];
        let pred = mlp.forward(&input_values)?[0].data();
        println!("{:?} -> {pred:+.4}  (target {target})", input);
    }

    Ok(())
}
