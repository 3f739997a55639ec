use crate::error::ScalarGradError;
use crate::nn::module::Module;
use crate::nn::neuron::Neuron;
use crate::nn::parameter::Parameter;
use crate::value::Value;
use rand::Rng;

/// A fully connected layer: `out_features` neurons applied to the same
/// input. Output dimensionality equals the neuron count.
#[derive(Debug)]
pub struct Layer {
    neurons: Vec<Neuron>,
}

impl Layer {
    pub fn new<R: Rng>(
        in_features: usize,
        out_features: usize,
        nonlinear: bool,
        rng: &mut R,
    ) -> Self {
        let neurons = (0..out_features)
            .map(|_| Neuron::new(in_features, nonlinear, rng))
            .collect();
        Layer { neurons }
    }

    pub fn in_features(&self) -> usize {
        self.neurons.first().map_or(0, Neuron::in_features)
    }

    pub fn out_features(&self) -> usize {
        self.neurons.len()
    }
}

impl Module for Layer {
    fn forward(&self, input: &[Value]) -> Result<Vec<Value>, ScalarGradError> {
        self.neurons
            .iter()
            .map(|neuron| neuron.activate(input))
            .collect()
    }

    fn parameters(&self) -> Vec<Parameter> {
        self.neurons
            .iter()
            .flat_map(Neuron::parameters)
            .collect()
    }
}

// --- Tests ---
