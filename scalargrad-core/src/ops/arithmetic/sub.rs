// scalargrad-core/src/ops/arithmetic/sub.rs

use super::add::add;
use super::neg::neg;
use crate::value::Value;
use std::ops::Sub;

/// Subtraction, derived as `a + (-b)`.
pub fn sub(a: &Value, b: &Value) -> Value {
    add(a, &neg(b))
}

impl Sub for &Value {
    type Output = Value;
    fn sub(self, rhs: &Value) -> Value {
        sub(self, rhs)
    }
}

impl Sub for Value {
    type Output = Value;
    fn sub(self, rhs: Value) -> Value {
        sub(&self, &rhs)
    }
}

impl Sub<f64> for &Value {
    type Output = Value;
    fn sub(self, rhs: f64) -> Value {
        sub(self, &Value::new(rhs))
    }
}

impl Sub<f64> for Value {
    type Output = Value;
    fn sub(self, rhs: f64) -> Value {
        sub(&self, &Value::new(rhs))
    }
}

impl Sub<&Value> for f64 {
    type Output = Value;
    fn sub(self, rhs: &Value) -> Value {
        sub(&Value::new(self), rhs)
    }
}

impl Sub<Value> for f64 {
    type Output = Value;
    fn sub(self, rhs: Value) -> Value {
        sub(&Value::new(self), &rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sub_forward() {
        let a = Value::new(5.0);
        let b = Value::new(3.0);
        assert_eq!(sub(&a, &b).data(), 2.0);
        assert_eq!((&a - 1.5).data(), 3.5);
        assert_eq!((10.0 - &b).data(), 7.0);
    }

    #[test]
    fn test_sub_backward() {
        let a = Value::new(5.0);
        let b = Value::new(3.0);
        let out = &a - &b;
        out.backward();
        assert_eq!(a.grad(), 1.0);
        assert_eq!(b.grad(), -1.0);
    }
}
