use crate::error::ScalarGradError;
use crate::nn::Parameter;
use crate::value::Value;

/// The base trait for all network building blocks (neurons, layers,
/// containers).
pub trait Module {
    /// Performs a forward pass, building a fresh expression graph over the
    /// input handles.
    ///
    /// Each call only allocates new transient nodes; it never mutates
    /// existing ones, so repeated calls with the same input produce
    /// identical outputs.
    ///
    /// # Errors
    /// Returns `ScalarGradError::DimensionMismatch` if the input length does
    /// not match the module's input dimensionality.
    fn forward(&self, input: &[Value]) -> Result<Vec<Value>, ScalarGradError>;

    /// Returns every learnable parameter of the module, flattened into one
    /// stable order: layer order, then neuron order within a layer, then
    /// weights before bias within a neuron. External optimizers iterate this
    /// exact sequence.
    fn parameters(&self) -> Vec<Parameter>;

    /// Resets the gradient of every parameter to zero. Called by the
    /// optimizer loop before each backward pass.
    fn zero_grad(&self) {
        for parameter in self.parameters() {
            parameter.zero_grad();
        }
    }
}
