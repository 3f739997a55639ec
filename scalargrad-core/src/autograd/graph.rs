use crate::value::Value;
use crate::value_data::ValueData;
use log::trace;
use std::cell::RefCell;
use std::collections::HashSet;

/// Recursively builds a topological sort of the computation graph.
/// Used by `backward()` to process nodes in the correct order.
///
/// Depth-first post-order: a node is pushed onto `order` only after all of
/// its operands, so reversing `order` yields a root-to-leaves schedule. The
/// `visited` set is keyed on node identity (the `RefCell` address), so a node
/// reachable via multiple paths is visited exactly once.
pub(crate) fn build_topo(
    node: &Value,
    visited: &mut HashSet<*const RefCell<ValueData>>,
    order: &mut Vec<Value>,
) {
    if visited.insert(node.as_ptr()) {
        trace!("build_topo: visiting node {:?}", node.as_ptr());
        for operand in node.operands() {
            build_topo(&operand, visited, order);
        }
        order.push(node.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::arithmetic::{add, mul};

    #[test]
    fn test_operands_precede_node() {
        let a = Value::new(2.0);
        let b = Value::new(3.0);
        let c = mul(&a, &b);
        let d = add(&c, &a);

        let mut visited = HashSet::new();
        let mut order = Vec::new();
        build_topo(&d, &mut visited, &mut order);

        let position = |v: &Value| order.iter().position(|n| n == v).unwrap();
        assert_eq!(order.len(), 4);
        assert!(position(&a) < position(&c));
        assert!(position(&b) < position(&c));
        assert!(position(&c) < position(&d));
    }

    #[test]
    fn test_shared_node_visited_once() {
        let a = Value::new(3.0);
        let square = mul(&a, &a);
        let diamond = add(&square, &square);

        let mut visited = HashSet::new();
        let mut order = Vec::new();
        build_topo(&diamond, &mut visited, &mut order);

        // a, square, diamond: sharing must not duplicate nodes.
        assert_eq!(order.len(), 3);
    }
}
