//! Errors raised while constructing expression nodes.

use super::ast::FunctionType;

/// A construction-validation failure. These surface synchronously at the
/// offending builder call; no partially-constructed node is ever produced.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("function of type [{0}] is not supported as a window function")]
    UnsupportedWindowFunction(FunctionType),
    #[error("no partitionBy fields specified")]
    NoPartitionByFields,
    #[error("no orderBy fields specified")]
    NoOrderByFields,
}
