// scalargrad-core/src/ops/arithmetic/neg.rs

use super::mul::mul;
use crate::value::Value;
use std::ops::Neg;

/// Negation, derived as multiplication by a constant -1 leaf. The graph
/// records a `Mul` node; no dedicated backward rule exists.
pub fn neg(a: &Value) -> Value {
    mul(a, &Value::new(-1.0))
}

impl Neg for &Value {
    type Output = Value;
    fn neg(self) -> Value {
        neg(self)
    }
}

impl Neg for Value {
    type Output = Value;
    fn neg(self) -> Value {
        neg(&self)
    }
}
