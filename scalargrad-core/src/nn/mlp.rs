use crate::error::ScalarGradError;
use crate::nn::layer::Layer;
use crate::nn::module::Module;
use crate::nn::parameter::Parameter;
use crate::value::Value;
use log::debug;
use rand::Rng;

/// A multi-layer perceptron: layers chained so each layer's input count
/// equals the previous layer's neuron count.
#[derive(Debug)]
pub struct Mlp {
    layers: Vec<Layer>,
}

impl Mlp {
    /// Builds an MLP with the given hidden/output sizes.
    ///
    /// By convention the last layer is linear and every earlier layer is
    /// rectified; this is a construction-time choice, not an engine
    /// invariant — assemble [`Layer`]s directly for other arrangements.
    pub fn new<R: Rng>(in_features: usize, layer_sizes: &[usize], rng: &mut R) -> Self {
        let mut layers = Vec::with_capacity(layer_sizes.len());
        let mut prev = in_features;
        for (i, &size) in layer_sizes.iter().enumerate() {
            let nonlinear = i + 1 != layer_sizes.len();
            layers.push(Layer::new(prev, size, nonlinear, rng));
            prev = size;
        }
        debug!("built mlp {} -> {:?}", in_features, layer_sizes);
        Mlp { layers }
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }
}

impl Module for Mlp {
    /// Threads the input through the layers in order. The output is the last
    /// layer's output, so with zero layers it is empty.
    fn forward(&self, input: &[Value]) -> Result<Vec<Value>, ScalarGradError> {
        let (first, rest) = match self.layers.split_first() {
            Some(split) => split,
            None => return Ok(Vec::new()),
        };
        let mut current = first.forward(input)?;
        for layer in rest {
            current = layer.forward(&current)?;
        }
        Ok(current)
    }

    fn parameters(&self) -> Vec<Parameter> {
        self.layers.iter().flat_map(Layer::parameters).collect()
    }
}

// --- Tests ---
#[cfg(test)]
#[path = "mlp_test.rs"]
mod tests; // Link to the test file
