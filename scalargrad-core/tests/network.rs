//! Contracts of the neuron/layer/network abstraction as seen by external
//! collaborators: the parameter accessor sequence, determinism of seeded
//! initialization, and purity of repeated forward evaluation.

use approx::assert_relative_eq;
use rand::rngs::StdRng;
use rand::SeedableRng;
use scalargrad_core::nn::{Mlp, Module, Neuron};
use scalargrad_core::Value;

fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

#[test]
fn test_reference_neuron_scenario() {
    // Single rectified neuron with fixed weights/bias from the reference
    // behavior: w = [-3, 1], b = 6.013735870195432, x = [2, 0].
    let mut rng = seeded_rng(0);
    let neuron = Neuron::new(2, true, &mut rng);
    let params = neuron.parameters();
    params[0].set_data(-3.0);
    params[1].set_data(1.0);
    params[2].set_data(6.013735870195432);

    let input = [Value::new(2.0), Value::new(0.0)];
    let out = neuron.activate(&input).unwrap();
    assert_relative_eq!(out.data(), 0.013735870195432, epsilon = 1e-12);

    out.backward();
    assert_relative_eq!(input[0].grad(), -3.0);
    assert_relative_eq!(input[1].grad(), 1.0);
    assert_relative_eq!(params[0].grad(), 2.0);
    assert_relative_eq!(params[1].grad(), 0.0);
}

#[test]
fn test_parameter_count_formula() {
    let mut rng = seeded_rng(21);
    let mlp = Mlp::new(3, &[4, 4, 1], &mut rng);
    assert_eq!(mlp.parameters().len(), (3 + 1) * 4 + (4 + 1) * 4 + (4 + 1));
}

#[test]
fn test_parameters_alias_live_nodes() {
    // The sequence returned by parameters() must reach the same nodes the
    // forward pass reads, so an optimizer's writes take effect.
    let mut rng = seeded_rng(2);
    let neuron = Neuron::new(1, false, &mut rng);
    let params = neuron.parameters();
    params[0].set_data(2.0); // weight
    params[1].set_data(0.0); // bias

    let out = neuron.activate(&[Value::new(5.0)]).unwrap();
    assert_relative_eq!(out.data(), 10.0);

    params[0].set_data(-2.0);
    let out = neuron.activate(&[Value::new(5.0)]).unwrap();
    assert_relative_eq!(out.data(), -10.0);
}

#[test]
fn test_manual_training_step_reduces_loss() {
    // One hand-rolled optimizer cycle over the accessor contract:
    // zero grads -> forward -> loss -> backward -> descend.
    let mut rng = seeded_rng(33);
    let mlp = Mlp::new(2, &[4, 1], &mut rng);
    let input = [Value::new(0.5), Value::new(-1.0)];
    let target = 1.0;

    let loss_at = |mlp: &Mlp| {
        let output = mlp.forward(&input).unwrap();
        (&output[0] - target).pow(2.0)
    };

    let initial = loss_at(&mlp);
    mlp.zero_grad();
    initial.backward();
    for param in mlp.parameters() {
        param.set_data(param.data() - 0.01 * param.grad());
    }

    let after = loss_at(&mlp);
    assert!(
        after.data() < initial.data(),
        "loss should decrease: {} -> {}",
        initial.data(),
        after.data()
    );
}

#[test]
fn test_per_step_graphs_keep_parameter_gradients_isolated_after_zeroing() {
    let mut rng = seeded_rng(8);
    let mlp = Mlp::new(1, &[2, 1], &mut rng);

    let out = mlp.forward(&[Value::new(1.0)]).unwrap();
    out[0].backward();
    let first: Vec<f64> = mlp.parameters().iter().map(|p| p.grad()).collect();

    // Without zeroing, a second pass doubles every contribution.
    let out = mlp.forward(&[Value::new(1.0)]).unwrap();
    out[0].backward();
    for (param, g) in mlp.parameters().iter().zip(&first) {
        assert_relative_eq!(param.grad(), 2.0 * g);
    }

    // After zeroing, one pass reproduces the original gradients.
    mlp.zero_grad();
    let out = mlp.forward(&[Value::new(1.0)]).unwrap();
    out[0].backward();
    for (param, g) in mlp.parameters().iter().zip(&first) {
        assert_relative_eq!(param.grad(), *g);
    }
}

#[test]
fn test_distinct_seeds_give_distinct_networks() {
    let mlp_a = Mlp::new(2, &[3], &mut seeded_rng(1));
    let mlp_b = Mlp::new(2, &[3], &mut seeded_rng(2));
    let differs = mlp_a
        .parameters()
        .iter()
        .zip(mlp_b.parameters())
        .any(|(a, b)| a.data() != b.data());
    assert!(differs);
}
