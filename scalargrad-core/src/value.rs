// scalargrad-core/src/value.rs

use crate::autograd::graph::build_topo;
use crate::ops::{self, Op};
use crate::value_data::ValueData;
use log::debug;
use std::cell::RefCell;
use std::collections::HashSet;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::rc::Rc;

/// The externally visible handle to a node of the computation graph.
///
/// `Value` is a thin wrapper over `Rc<RefCell<ValueData>>`: it is cheap to
/// clone, and clones alias the *same* underlying node rather than copying it.
/// Equality and hashing are based on node identity (the `Rc` pointer), not on
/// the stored value, so two nodes holding equal numbers remain distinct graph
/// vertices.
pub struct Value(pub(crate) Rc<RefCell<ValueData>>);

impl Value {
    /// Creates a new leaf node holding `data`.
    pub fn new(data: f64) -> Self {
        Value(Rc::new(RefCell::new(ValueData {
            data,
            grad: 0.0,
            prev: Vec::new(),
            op: None,
        })))
    }

    /// Creates a node produced by an operation builder.
    ///
    /// The operands must already exist, which is what keeps the graph acyclic
    /// without any runtime check.
    pub(crate) fn from_op(data: f64, prev: Vec<Value>, op: Op) -> Self {
        Value(Rc::new(RefCell::new(ValueData {
            data,
            grad: 0.0,
            prev,
            op: Some(op),
        })))
    }

    // --- Accessors ---

    /// Returns the node's forward value.
    pub fn data(&self) -> f64 {
        self.0.borrow().data
    }

    /// Returns the gradient accumulated on this node so far.
    pub fn grad(&self) -> f64 {
        self.0.borrow().grad
    }

    /// Overwrites the node's value. Exposed publicly only through
    /// `nn::Parameter`, the narrow accessor contract for external optimizers.
    pub(crate) fn set_data(&self, data: f64) {
        self.0.borrow_mut().data = data;
    }

    pub(crate) fn set_grad(&self, grad: f64) {
        self.0.borrow_mut().grad = grad;
    }

    /// Adds `delta` into the gradient accumulator. Backward rules must use
    /// this (never assignment) so contributions from multiple downstream
    /// paths sum correctly.
    pub(crate) fn accumulate_grad(&self, delta: f64) {
        self.0.borrow_mut().grad += delta;
    }

    pub(crate) fn op(&self) -> Option<Op> {
        self.0.borrow().op
    }

    /// Returns handles to the node's operands (cheap `Rc` clones).
    pub(crate) fn operands(&self) -> Vec<Value> {
        self.0.borrow().prev.clone()
    }

    /// Stable identity of the underlying node, used as a key during graph
    /// traversal.
    pub(crate) fn as_ptr(&self) -> *const RefCell<ValueData> {
        Rc::as_ptr(&self.0)
    }

    // --- Backward engine ---

    /// Populates the gradient of every node reachable from `self`.
    ///
    /// Performs a depth-first post-order traversal keyed on node identity,
    /// seeds `self.grad = 1.0`, then invokes each node's local gradient rule
    /// exactly once in reverse topological order. Gradients are *added onto*
    /// whatever each node held before the call: the engine never resets
    /// non-root gradients, so callers wanting isolated per-step gradients
    /// must zero parameter gradients themselves between passes.
    pub fn backward(&self) {
        let mut visited = HashSet::new();
        let mut order = Vec::new();
        build_topo(self, &mut visited, &mut order);
        debug!("backward: {} nodes reachable from the root", order.len());

        self.set_grad(1.0);
        for node in order.iter().rev() {
            ops::backward_step(node);
        }
    }
}

// --- Trait implementations for the handle ---

impl Clone for Value {
    /// Clones the handle (bumps the `Rc` count); the clone aliases the same
    /// underlying node.
    fn clone(&self) -> Self {
        Value(Rc::clone(&self.0))
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.0.borrow();
        f.debug_struct("Value")
            .field("data", &inner.data)
            .field("grad", &inner.grad)
            .field("op", &inner.op)
            .field("operands", &inner.prev.len())
            .finish()
    }
}

/// Equality is node identity, consistent with `Hash`.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for Value {}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        Rc::as_ptr(&self.0).hash(state);
    }
}

impl From<f64> for Value {
    fn from(data: f64) -> Self {
        Value::new(data)
    }
}

// --- Tests ---

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leaf_creation() {
        let v = Value::new(3.5);
        assert_eq!(v.data(), 3.5);
        assert_eq!(v.grad(), 0.0);
        assert!(v.op().is_none());
        assert!(v.operands().is_empty());
    }

    #[test]
    fn test_identity_not_value_equality() {
        let a = Value::new(1.0);
        let b = Value::new(1.0);
        // Same stored number, distinct nodes.
        assert_ne!(a, b);
        // Clones alias the same node.
        let a2 = a.clone();
        assert_eq!(a, a2);
        a2.set_data(7.0);
        assert_eq!(a.data(), 7.0);
    }

    #[test]
    fn test_hash_follows_identity() {
        let a = Value::new(2.0);
        let b = Value::new(2.0);
        let mut set = HashSet::new();
        assert!(set.insert(a.clone()));
        assert!(set.contains(&a.clone()));
        assert!(!set.contains(&b));
        assert!(set.insert(b));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_backward_on_lone_leaf_seeds_gradient() {
        let a = Value::new(4.0);
        a.backward();
        assert_eq!(a.grad(), 1.0);
    }
}
