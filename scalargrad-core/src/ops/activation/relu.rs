// scalargrad-core/src/ops/activation/relu.rs

use crate::ops::Op;
use crate::value::Value;

// --- Forward operation ---

/// Builds the node `max(input, 0)`.
///
/// Written as `if x < 0 { 0 } else { x }` rather than `f64::max` so a NaN
/// input stays NaN instead of being swallowed by the max.
pub fn relu(input: &Value) -> Value {
    let x = input.data();
    let out = if x < 0.0 { 0.0 } else { x };
    Value::from_op(out, vec![input.clone()], Op::Relu)
}

// --- Backward operation ---

/// The upstream gradient passes through where the output is positive and is
/// blocked elsewhere. An output of exactly 0 gets the subgradient 0.
pub(crate) fn backward(out: &Value) {
    let contribution = if out.data() > 0.0 { out.grad() } else { 0.0 };
    out.operands()[0].accumulate_grad(contribution);
}

impl Value {
    /// Applies the rectified linear unit, `max(self, 0)`.
    pub fn relu(&self) -> Value {
        relu(self)
    }
}

// --- Tests ---
