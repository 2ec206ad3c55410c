//! The SQL expression model and its traversal protocols.

pub mod ast;
pub mod error;
pub mod helpers;
pub mod hints;
pub mod transform;
pub mod traverse;
pub mod visitor;
pub mod window;
