//! Deep copy with transformation: full tree clones where every child is
//! passed through a caller-supplied rewrite.
//!
//! The transformation, not the node, owns recursion policy: a node's
//! [`deep_copy_with`](crate::sql::ast::Expression::deep_copy_with) hands each
//! child to the transformation exactly once, and the transformation decides
//! whether to recurse (usually by calling `deep_copy_with` on the child in
//! turn), substitute a different node, or return the child unchanged.
//!
//! A transformation handed a kind-constrained slot (the function of a window
//! function) is expected to return a node of the same kind.

use super::ast::{Expression, Function};
use super::window::WindowFunction;

/// A rewrite applied to every child node during a deep copy.
pub trait DeepCopyTransformation {
    fn deep_copy(&mut self, node: &Expression) -> Expression;
}

/// Any `FnMut(&Expression) -> Expression` is a transformation.
impl<F> DeepCopyTransformation for F
where
    F: FnMut(&Expression) -> Expression,
{
    fn deep_copy(&mut self, node: &Expression) -> Expression {
        self(node)
    }
}

/// The identity policy: copies every node as-is, recursing all the way down,
/// so the result is structurally equal to the source but shares nothing with
/// it.
pub fn no_transformation(node: &Expression) -> Expression {
    node.deep_copy_with(&mut no_transformation)
}

/// Applies a transformation to each element of a child sequence, preserving
/// order.
pub fn transform_iterable<T>(nodes: &[Expression], transformation: &mut T) -> Vec<Expression>
where
    T: DeepCopyTransformation + ?Sized,
{
    nodes
        .iter()
        .map(|node| transformation.deep_copy(node))
        .collect()
}

impl Expression {
    /// Rebuilds this node with every child passed through `transformation`.
    /// Aliases are plain values, copied verbatim. Leaves have no children and
    /// are cloned outright.
    pub fn deep_copy_with<T>(&self, transformation: &mut T) -> Expression
    where
        T: DeepCopyTransformation + ?Sized,
    {
        match self {
            Expression::FieldReference(node) => Expression::FieldReference(node.clone()),
            Expression::Literal(node) => Expression::Literal(node.clone()),
            Expression::Function(node) => Expression::Function(Function {
                kind: node.kind,
                args: transform_iterable(&node.args, transformation),
                alias: node.alias.clone(),
            }),
            Expression::WindowFunction(node) => {
                Expression::WindowFunction(WindowFunction {
                    alias: node.alias.clone(),
                    function: Box::new(transformation.deep_copy(&node.function)),
                    order_bys: transform_iterable(&node.order_bys, transformation),
                    partition_bys: transform_iterable(&node.partition_bys, transformation),
                })
            }
        }
    }

    /// A fully independent copy of this tree.
    pub fn deep_copy(&self) -> Expression {
        self.deep_copy_with(&mut no_transformation)
    }
}
