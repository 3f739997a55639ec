pub mod activation;
pub mod arithmetic;

use crate::value::Value;

/// Tag identifying the operation that produced a node.
///
/// The backward pass dispatches on this tag: the gradient rule for each node
/// is data carried by the graph, not captured behavior. Only the primitive
/// operations appear here; negate, subtract, and divide are compositions and
/// introduce no tags of their own.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Op {
    Add,
    Mul,
    /// Raise to a constant exponent. The exponent is a plain number, not a
    /// differentiable node, so it rides along in the tag.
    Pow(f64),
    Relu,
}

/// Invokes the local gradient rule bound to `node`, adding the correct
/// contribution into each operand's gradient accumulator. Leaves are no-ops.
pub(crate) fn backward_step(node: &Value) {
    match node.op() {
        Some(Op::Add) => arithmetic::add::backward(node),
        Some(Op::Mul) => arithmetic::mul::backward(node),
        Some(Op::Pow(exponent)) => arithmetic::pow::backward(node, exponent),
        Some(Op::Relu) => activation::relu::backward(node),
        None => {}
    }
}
