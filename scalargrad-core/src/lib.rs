//! Reverse-mode automatic differentiation over scalar values.
//!
//! Arithmetic on [`Value`] handles evaluates eagerly while recording a
//! directed acyclic graph of computation nodes; [`Value::backward`] walks
//! that graph in reverse
//! topological order and accumulates exact gradients via the chain rule.
//! The [`nn`] module layers a minimal feed-forward network abstraction
//! (neuron, layer, multi-layer perceptron) on top of the engine.

pub mod autograd;
pub mod error;
pub mod nn;
pub mod ops;
pub mod value;
pub mod value_data;

pub use error::ScalarGradError;
pub use value::Value;
