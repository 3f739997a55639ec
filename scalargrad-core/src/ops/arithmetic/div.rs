// scalargrad-core/src/ops/arithmetic/div.rs

use super::mul::mul;
use super::pow::pow;
use crate::value::Value;
use std::ops::Div;

/// Division, derived as `a * b^-1`.
///
/// Division by a zero-valued node yields IEEE Infinity (or NaN for 0/0) and
/// propagates without interception.
pub fn div(a: &Value, b: &Value) -> Value {
    mul(a, &pow(b, -1.0))
}

impl Div for &Value {
    type Output = Value;
    fn div(self, rhs: &Value) -> Value {
        div(self, rhs)
    }
}

impl Div for Value {
    type Output = Value;
    fn div(self, rhs: Value) -> Value {
        div(&self, &rhs)
    }
}

impl Div<f64> for &Value {
    type Output = Value;
    fn div(self, rhs: f64) -> Value {
        div(self, &Value::new(rhs))
    }
}

impl Div<f64> for Value {
    type Output = Value;
    fn div(self, rhs: f64) -> Value {
        div(&self, &Value::new(rhs))
    }
}

impl Div<&Value> for f64 {
    type Output = Value;
    fn div(self, rhs: &Value) -> Value {
        div(&Value::new(self), rhs)
    }
}

impl Div<Value> for f64 {
    type Output = Value;
    fn div(self, rhs: Value) -> Value {
        div(&Value::new(self), &rhs)
    }
}
