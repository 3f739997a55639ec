// scalargrad-core/src/value_data.rs

use crate::ops::Op;
use crate::value::Value;
use std::fmt::{Debug, Formatter, Result as FmtResult};

/// Internal storage for one node of the computation graph.
///
/// Wrapped in `Rc<RefCell<...>>` by the [`Value`] handle to allow shared
/// ownership and the interior mutability needed for gradient accumulation.
pub struct ValueData {
    /// Result of the node's operation, or the constant/parameter a leaf holds.
    pub(crate) data: f64,
    /// Gradient accumulator, zero at creation. Backward rules only ever add
    /// into this field, so a node referenced by several downstream nodes sums
    /// all of their contributions.
    pub(crate) grad: f64,
    /// Operands of the operation that produced this node (empty for leaves).
    ///
    /// These are strong references: operands always pre-exist the nodes that
    /// reference them, so the graph is acyclic by construction and the strong
    /// edges cannot form a reference cycle. A node stays alive exactly as
    /// long as some handle or downstream node still references it.
    pub(crate) prev: Vec<Value>,
    /// Tag identifying the forward/backward rule that produced this node.
    /// `None` for leaves.
    pub(crate) op: Option<Op>,
}

// Manual Debug: print the operand count rather than recursing into a
// potentially large graph.
impl Debug for ValueData {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("ValueData")
            .field("data", &self.data)
            .field("grad", &self.grad)
            .field("op", &self.op)
            .field("operands", &self.prev.len())
            .finish()
    }
}
