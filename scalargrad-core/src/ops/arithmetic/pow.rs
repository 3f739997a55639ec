// scalargrad-core/src/ops/arithmetic/pow.rs

use crate::ops::Op;
use crate::value::Value;

// --- Forward operation ---

/// Builds the node `base ^ exponent` for a constant exponent.
///
/// The exponent is not a graph node and receives no gradient. A negative
/// base with a non-integer exponent produces NaN per IEEE semantics, which
/// propagates untouched.
pub fn pow(base: &Value, exponent: f64) -> Value {
    Value::from_op(
        base.data().powf(exponent),
        vec![base.clone()],
        Op::Pow(exponent),
    )
}

// --- Backward operation ---

/// d(a^k)/da = k * a^(k-1).
pub(crate) fn backward(out: &Value, exponent: f64) {
    let upstream = out.grad();
    let operands = out.operands();
    let base = operands[0].data();
    operands[0].accumulate_grad(exponent * base.powf(exponent - 1.0) * upstream);
}

impl Value {
    /// Raises this node to a constant power.
    pub fn pow(&self, exponent: f64) -> Value {
        pow(self, exponent)
    }
}

// --- Tests ---
