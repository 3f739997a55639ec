// scalargrad-core/src/ops/arithmetic/add.rs

use crate::ops::Op;
use crate::value::Value;
use std::ops::Add;

// --- Forward operation ---

/// Builds the node `a + b`, evaluating the sum eagerly and recording the
/// operands and gradient rule for the backward pass.
pub fn add(a: &Value, b: &Value) -> Value {
    Value::from_op(a.data() + b.data(), vec![a.clone(), b.clone()], Op::Add)
}

// --- Backward operation ---

/// d(a + b)/da = 1, d(a + b)/db = 1: the upstream gradient flows to both
/// operands unchanged.
pub(crate) fn backward(out: &Value) {
    let upstream = out.grad();
    let operands = out.operands();
    operands[0].accumulate_grad(upstream);
    operands[1].accumulate_grad(upstream);
}

// --- Operator sugar ---

impl Add for &Value {
    type Output = Value;
    fn add(self, rhs: &Value) -> Value {
        add(self, rhs)
    }
}

impl Add for Value {
    type Output = Value;
    fn add(self, rhs: Value) -> Value {
        add(&self, &rhs)
    }
}

impl Add<f64> for &Value {
    type Output = Value;
    fn add(self, rhs: f64) -> Value {
        add(self, &Value::new(rhs))
    }
}

impl Add<f64> for Value {
    type Output = Value;
    fn add(self, rhs: f64) -> Value {
        add(&self, &Value::new(rhs))
    }
}

impl Add<&Value> for f64 {
    type Output = Value;
    fn add(self, rhs: &Value) -> Value {
        add(&Value::new(self), rhs)
    }
}

impl Add<Value> for f64 {
    type Output = Value;
    fn add(self, rhs: Value) -> Value {
        add(&Value::new(self), &rhs)
    }
}

// --- Tests ---
