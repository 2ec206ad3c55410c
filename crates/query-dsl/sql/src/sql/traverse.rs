//! Generic, node-kind-agnostic tree traversal.
//!
//! An [`ObjectTreeTraverser`] visits every node reachable from a root via a
//! uniform `dispatch` operation: the traverser invokes its callback on the
//! node, then asks the node to [`drive`](Driver::drive) it through each child
//! slot in a fixed, documented order. The callback decides what visiting
//! means (collect, count, feed an external accumulator); nodes know nothing
//! about the traversal's purpose.

use super::ast::{Expression, Function};
use super::window::WindowFunction;

/// Dispatches a visitation callback over every node of a tree.
pub struct ObjectTreeTraverser<'a> {
    callback: &'a mut dyn FnMut(&Expression),
}

impl<'a> ObjectTreeTraverser<'a> {
    /// A traverser invoking `callback` on every dispatched node.
    pub fn for_callback(callback: &'a mut dyn FnMut(&Expression)) -> Self {
        ObjectTreeTraverser { callback }
    }

    /// Visits `node`, then recurses into its children.
    pub fn dispatch(&mut self, node: &Expression) -> &mut Self {
        (self.callback)(node);
        node.drive(self);
        self
    }

    /// Dispatches each node of an ordered sequence in turn.
    pub fn dispatch_all(&mut self, nodes: &[Expression]) -> &mut Self {
        for node in nodes {
            self.dispatch(node);
        }
        self
    }
}

/// Implemented by nodes that have child slots to expose to a traverser.
pub trait Driver {
    /// Dispatches the traverser once per logical child slot, in a fixed
    /// order.
    fn drive(&self, traverser: &mut ObjectTreeTraverser);
}

impl Driver for Expression {
    fn drive(&self, traverser: &mut ObjectTreeTraverser) {
        match self {
            // leaves
            Expression::FieldReference(_) | Expression::Literal(_) => {}
            Expression::Function(node) => node.drive(traverser),
            Expression::WindowFunction(node) => node.drive(traverser),
        }
    }
}

impl Driver for Function {
    fn drive(&self, traverser: &mut ObjectTreeTraverser) {
        traverser.dispatch_all(&self.args);
    }
}

/// Child order: function, then order-bys, then partition-bys.
impl Driver for WindowFunction {
    fn drive(&self, traverser: &mut ObjectTreeTraverser) {
        traverser
            .dispatch(&self.function)
            .dispatch_all(&self.order_bys)
            .dispatch_all(&self.partition_bys);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sql::helpers;

    fn describe(node: &Expression) -> String {
        match node {
            Expression::FieldReference(reference) => reference.name.0.clone(),
            Expression::Function(function) => format!("{}", function.kind),
            Expression::WindowFunction(_) => "OVER".to_string(),
            Expression::Literal(literal) => literal.to_string(),
        }
    }

    #[test]
    fn dispatch_visits_children_in_declaration_order_exactly_once() {
        let window = crate::sql::window::WindowFunction::over(helpers::sum(
            helpers::field("x"),
        ))
        .unwrap()
        .order_by(vec![helpers::field("o1"), helpers::field("o2")])
        .unwrap()
        .partition_by(vec![helpers::field("p1")])
        .unwrap()
        .build();
        let tree = Expression::WindowFunction(window);

        let mut seen = Vec::new();
        let mut callback = |node: &Expression| seen.push(describe(node));
        ObjectTreeTraverser::for_callback(&mut callback).dispatch(&tree);

        assert_eq!(seen, vec!["OVER", "SUM", "x", "o1", "o2", "p1"]);
    }

    #[test]
    fn traversal_can_collect_referenced_columns_without_kind_knowledge() {
        let tree = Expression::Function(helpers::coalesce(vec![
            helpers::field("a"),
            helpers::field("b"),
            helpers::literal(0),
        ]));

        let mut columns = Vec::new();
        let mut callback = |node: &Expression| {
            if let Expression::FieldReference(reference) = node {
                columns.push(reference.name.0.clone());
            }
        };
        ObjectTreeTraverser::for_callback(&mut callback).dispatch(&tree);

        assert_eq!(columns, vec!["a", "b"]);
    }
}
