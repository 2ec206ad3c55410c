//! Typed, double-dispatch visitation.
//!
//! Where the generic traverser (see [`traverse`](super::traverse)) is
//! kind-agnostic, a [`SchemaAndDataChangeVisitor`] has one method per node
//! kind, each defaulting to doing nothing, so an analysis only overrides the
//! kinds it cares about. A node's `accept` calls its own `visit_*` method
//! first, then propagates to its children in the same fixed order the
//! traverser uses; empty child sequences are skipped silently.

use super::ast::{Expression, FieldReference, Function, Literal};
use super::window::WindowFunction;

/// Kind-aware whole-tree analysis, e.g. detecting constructs a particular
/// dialect cannot execute.
pub trait SchemaAndDataChangeVisitor {
    fn visit_field_reference(&mut self, _node: &FieldReference) {}

    fn visit_function(&mut self, _node: &Function) {}

    fn visit_window_function(&mut self, _node: &WindowFunction) {}

    fn visit_literal(&mut self, _node: &Literal) {}
}

impl Expression {
    /// Double dispatch into the visitor method for this node's kind, then
    /// into each child.
    pub fn accept<V>(&self, visitor: &mut V)
    where
        V: SchemaAndDataChangeVisitor + ?Sized,
    {
        match self {
            Expression::FieldReference(node) => visitor.visit_field_reference(node),
            Expression::Literal(node) => visitor.visit_literal(node),
            Expression::Function(node) => node.accept(visitor),
            Expression::WindowFunction(node) => node.accept(visitor),
        }
    }
}

impl Function {
    pub fn accept<V>(&self, visitor: &mut V)
    where
        V: SchemaAndDataChangeVisitor + ?Sized,
    {
        visitor.visit_function(self);
        for arg in &self.args {
            arg.accept(visitor);
        }
    }
}

impl WindowFunction {
    /// Visits this node, then the function, then each order-by, then each
    /// partition-by.
    pub fn accept<V>(&self, visitor: &mut V)
    where
        V: SchemaAndDataChangeVisitor + ?Sized,
    {
        visitor.visit_window_function(self);
        self.function.accept(visitor);
        for node in &self.order_bys {
            node.accept(visitor);
        }
        for node in &self.partition_bys {
            node.accept(visitor);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sql::helpers;

    #[derive(Default)]
    struct Recorder {
        events: Vec<String>,
    }

    impl SchemaAndDataChangeVisitor for Recorder {
        fn visit_field_reference(&mut self, node: &FieldReference) {
            self.events.push(format!("field:{}", node.name.0));
        }

        fn visit_function(&mut self, node: &Function) {
            self.events.push(format!("function:{}", node.kind));
        }

        fn visit_window_function(&mut self, _node: &WindowFunction) {
            self.events.push("window".to_string());
        }

        fn visit_literal(&mut self, node: &Literal) {
            self.events.push(format!("literal:{}", node));
        }
    }

    #[test]
    fn accept_visits_self_before_children_in_fixed_order() {
        let window = WindowFunction::over(helpers::sum(helpers::field("x")))
            .unwrap()
            .order_by(vec![helpers::field("o")])
            .unwrap()
            .partition_by(vec![helpers::field("p")])
            .unwrap()
            .build();

        let mut recorder = Recorder::default();
        Expression::WindowFunction(window).accept(&mut recorder);

        assert_eq!(
            recorder.events,
            vec!["window", "function:SUM", "field:x", "field:o", "field:p"]
        );
    }

    #[test]
    fn empty_child_sequences_are_skipped_silently() {
        let window = WindowFunction::over(helpers::count(helpers::field("x")))
            .unwrap()
            .build();

        let mut recorder = Recorder::default();
        Expression::WindowFunction(window).accept(&mut recorder);

        assert_eq!(recorder.events, vec!["window", "function:COUNT", "field:x"]);
    }

    #[test]
    fn default_methods_visit_nothing_but_still_reach_the_whole_tree() {
        struct CountWindows(usize);
        impl SchemaAndDataChangeVisitor for CountWindows {
            fn visit_window_function(&mut self, _node: &WindowFunction) {
                self.0 += 1;
            }
        }

        let inner = WindowFunction::over(helpers::sum(helpers::field("x")))
            .unwrap()
            .build();
        let outer = Expression::Function(helpers::coalesce(vec![
            Expression::WindowFunction(inner),
            helpers::literal(0),
        ]));

        let mut counter = CountWindows(0);
        outer.accept(&mut counter);
        assert_eq!(counter.0, 1);
    }
}
