//! An immutable expression-tree model for fragments of a dialect-agnostic SQL
//! query, together with the machinery to construct, compare, rewrite, and
//! traverse such trees without per-node-kind special cases downstream.

pub mod sql;
