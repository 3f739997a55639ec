// scalargrad-core/src/ops/arithmetic/mul.rs

use crate::ops::Op;
use crate::value::Value;
use std::ops::Mul;

// --- Forward operation ---

/// Builds the node `a * b`.
pub fn mul(a: &Value, b: &Value) -> Value {
    Value::from_op(a.data() * b.data(), vec![a.clone(), b.clone()], Op::Mul)
}

// --- Backward operation ---

/// d(a * b)/da = b, d(a * b)/db = a.
pub(crate) fn backward(out: &Value) {
    let upstream = out.grad();
    let operands = out.operands();
    // Read both operand values before mutating either gradient: the two
    // operands may alias the same node (squaring via `a * a`), and the
    // mutable borrows must be taken one at a time.
    let (lhs, rhs) = (operands[0].data(), operands[1].data());
    operands[0].accumulate_grad(rhs * upstream);
    operands[1].accumulate_grad(lhs * upstream);
}

// --- Operator sugar ---

impl Mul for &Value {
    type Output = Value;
    fn mul(self, rhs: &Value) -> Value {
        mul(self, rhs)
    }
}

impl Mul for Value {
    type Output = Value;
    fn mul(self, rhs: Value) -> Value {
        mul(&self, &rhs)
    }
}

impl Mul<f64> for &Value {
    type Output = Value;
    fn mul(self, rhs: f64) -> Value {
        mul(self, &Value::new(rhs))
    }
}

impl Mul<f64> for Value {
    type Output = Value;
    fn mul(self, rhs: f64) -> Value {
        mul(&self, &Value::new(rhs))
    }
}

impl Mul<&Value> for f64 {
    type Output = Value;
    fn mul(self, rhs: &Value) -> Value {
        mul(&Value::new(self), rhs)
    }
}

impl Mul<Value> for f64 {
    type Output = Value;
    fn mul(self, rhs: Value) -> Value {
        mul(&Value::new(self), &rhs)
    }
}

// --- Tests ---

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mul_forward() {
        let a = Value::new(2.0);
        let b = Value::new(-3.0);
        let out = mul(&a, &b);
        assert_eq!(out.data(), -6.0);
        assert_eq!(out.op(), Some(Op::Mul));
    }

    #[test]
    fn test_mul_backward() {
        let a = Value::new(2.0);
        let b = Value::new(-3.0);
        let out = mul(&a, &b);
        out.backward();
        assert_eq!(a.grad(), -3.0);
        assert_eq!(b.grad(), 2.0);
    }

    #[test]
    fn test_square_via_self_reuse() {
        // a * a must back-propagate 2 * a.value, not a.value.
        let a = Value::new(3.0);
        let out = mul(&a, &a);
        assert_eq!(out.data(), 9.0);
        out.backward();
        assert_eq!(a.grad(), 6.0);
    }

    #[test]
    fn test_mul_operators() {
        let a = Value::new(3.0);
        let b = Value::new(4.0);
        assert_eq!((&a * &b).data(), 12.0);
        assert_eq!((&a * 2.0).data(), 6.0);
        assert_eq!((2.0 * &b).data(), 8.0);
        assert_eq!((a.clone() * b.clone()).data(), 12.0);
    }
}
