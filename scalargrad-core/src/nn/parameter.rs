use crate::value::Value;
use std::fmt;
use std::ops::Deref;

/// A wrapper around a leaf [`Value`] marking it as a learnable parameter.
///
/// This is the narrow accessor contract an external optimizer works through
/// between training steps: read the gradient (via `Deref` to [`Value`]),
/// overwrite the value with [`set_data`](Parameter::set_data), and reset the
/// gradient with [`zero_grad`](Parameter::zero_grad). Mutation of node
/// values is deliberately not exposed on arbitrary graph nodes.
pub struct Parameter(Value);

impl Parameter {
    /// Wraps a leaf value as a parameter.
    pub fn new(value: Value) -> Self {
        Parameter(value)
    }

    /// Overwrites the parameter's value in place (the optimizer update).
    pub fn set_data(&self, data: f64) {
        self.0.set_data(data);
    }

    /// Resets the accumulated gradient to zero. The backward engine never
    /// does this implicitly.
    pub fn zero_grad(&self) {
        self.0.set_grad(0.0);
    }

    /// Consumes the Parameter and returns the underlying value handle.
    pub fn into_inner(self) -> Value {
        self.0
    }
}

// Allow reading the underlying Value immutably via Deref.
impl Deref for Parameter {
    type Target = Value;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl fmt::Debug for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Parameter({:?})", self.0)
    }
}

impl Clone for Parameter {
    /// Cloning a Parameter clones the handle (shallow clone via `Rc`); the
    /// clone aliases the same node.
    fn clone(&self) -> Self {
        Parameter(self.0.clone())
    }
}
