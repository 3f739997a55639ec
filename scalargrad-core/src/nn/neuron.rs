use crate::error::ScalarGradError;
use crate::nn::init::uniform_parameter;
use crate::nn::module::Module;
use crate::nn::parameter::Parameter;
use crate::ops::arithmetic::{add, mul};
use crate::value::Value;
use rand::Rng;
use std::ops::Deref;

/// A single neuron: `in_features` weights plus one bias, with an optional
/// rectifier on the output.
#[derive(Debug)]
pub struct Neuron {
    weights: Vec<Parameter>,
    bias: Parameter,
    nonlinear: bool,
}

impl Neuron {
    /// Creates a neuron with weights and bias drawn uniformly from [-1, 1].
    pub fn new<R: Rng>(in_features: usize, nonlinear: bool, rng: &mut R) -> Self {
        let weights = (0..in_features).map(|_| uniform_parameter(rng)).collect();
        let bias = uniform_parameter(rng);
        Neuron {
            weights,
            bias,
            nonlinear,
        }
    }

    /// Input dimensionality (the weight count).
    pub fn in_features(&self) -> usize {
        self.weights.len()
    }

    /// Whether the rectifier is applied to the output.
    pub fn nonlinear(&self) -> bool {
        self.nonlinear
    }

    /// Computes `bias + Σ weight_i * x_i`, rectified if the neuron is
    /// nonlinear.
    ///
    /// # Errors
    /// `DimensionMismatch` if `input.len()` differs from the weight count.
    pub fn activate(&self, input: &[Value]) -> Result<Value, ScalarGradError> {
        if input.len() != self.weights.len() {
            return Err(ScalarGradError::DimensionMismatch {
                expected: self.weights.len(),
                actual: input.len(),
            });
        }

        let mut sum = self.bias.deref().clone();
        for (weight, x) in self.weights.iter().zip(input) {
            sum = add(&sum, &mul(weight, x));
        }

        Ok(if self.nonlinear { sum.relu() } else { sum })
    }
}

impl Module for Neuron {
    fn forward(&self, input: &[Value]) -> Result<Vec<Value>, ScalarGradError> {
        Ok(vec![self.activate(input)?])
    }

    /// Weights in order, then the bias.
    fn parameters(&self) -> Vec<Parameter> {
        let mut params = Vec::with_capacity(self.weights.len() + 1);
        params.extend(self.weights.iter().cloned());
        params.push(self.bias.clone());
        params
    }
}

// --- Tests ---
