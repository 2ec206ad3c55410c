//! Window functions and their builder.
//!
//! A window function evaluates an aggregate over a partition of rows rather
//! than collapsing all rows into one result:
//!
//! ```text
//!   WindowFunction::over([function])                 = [function]
//!        .partition_by([fields])                     = [function] OVER (PARTITION BY [fields])
//!        .order_by([fields])                         = [function] OVER (... ORDER BY [fields])
//! ```
//!
//! Restrictions:
//! - `partition_by` is optional: if not specified, all the rows of the result
//!   set are treated as a single group.
//! - `order_by` is optional: if not specified, the entire partition is used as
//!   the window frame.
//! - The default direction for fields in `order_by` is ascending.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::ast::{Direction, Expression, FieldReference, Function};
use super::error::Error;

/// An aggregate function evaluated `OVER` an optional partitioning and
/// ordering of the result set. Built only through [`WindowFunction::over`];
/// immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WindowFunction {
    pub(crate) alias: Option<String>,
    pub(crate) function: Box<Expression>,
    pub(crate) order_bys: Vec<Expression>,
    pub(crate) partition_bys: Vec<Expression>,
}

impl WindowFunction {
    /// Starts a new window function builder over the given function.
    ///
    /// Fails with [`Error::UnsupportedWindowFunction`] unless the function
    /// kind is one of AVERAGE, SUM, COUNT, MIN, MAX.
    pub fn over(function: Function) -> Result<WindowFunctionBuilder, Error> {
        if !function.kind.is_window_compatible() {
            return Err(Error::UnsupportedWindowFunction(function.kind));
        }
        Ok(WindowFunctionBuilder {
            alias: None,
            function,
            order_bys: Vec::new(),
            partition_bys: Vec::new(),
        })
    }

    /// The function evaluated over the window. Always an
    /// [`Expression::Function`] of a window-compatible kind.
    pub fn function(&self) -> &Expression {
        &self.function
    }

    /// The fields to order by, in clause order.
    pub fn order_bys(&self) -> &[Expression] {
        &self.order_bys
    }

    /// The fields to partition by, in clause order.
    pub fn partition_bys(&self) -> &[Expression] {
        &self.partition_bys
    }

    /// The output alias, if one was set.
    pub fn alias(&self) -> Option<&str> {
        self.alias.as_deref()
    }

    /// Shallow rename: same children, different alias.
    pub(crate) fn with_alias(&self, alias: Option<String>) -> WindowFunction {
        WindowFunction {
            alias,
            function: self.function.clone(),
            order_bys: self.order_bys.clone(),
            partition_bys: self.partition_bys.clone(),
        }
    }
}

impl fmt::Display for WindowFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} OVER [", self.function)?;
        if !self.partition_bys.is_empty() {
            write!(f, " PARTITION BY ")?;
            write_list(f, &self.partition_bys)?;
        }
        if !self.order_bys.is_empty() {
            write!(f, " ORDER BY ")?;
            write_list(f, &self.order_bys)?;
        }
        write!(f, " ]")?;
        match &self.alias {
            Some(alias) => write!(f, " AS {alias}"),
            None => Ok(()),
        }
    }
}

fn write_list(f: &mut fmt::Formatter<'_>, nodes: &[Expression]) -> fmt::Result {
    for (index, node) in nodes.iter().enumerate() {
        if index > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{node}")?;
    }
    Ok(())
}

/// The window function builder.
///
/// Mutation is confined to the builder; [`build`](WindowFunctionBuilder::build)
/// consumes it, so a builder cannot be reused after building. A builder is a
/// single-owner value: share one across threads only behind external
/// synchronization.
#[derive(Debug)]
pub struct WindowFunctionBuilder {
    alias: Option<String>,
    function: Function,
    order_bys: Vec<Expression>,
    partition_bys: Vec<Expression>,
}

impl WindowFunctionBuilder {
    /// Appends fields to the PARTITION BY list, preserving call order across
    /// multiple invocations. An explicit call with zero fields is rejected;
    /// to pass a possibly-empty collection use
    /// [`partition_by_iter`](Self::partition_by_iter).
    pub fn partition_by(mut self, fields: Vec<Expression>) -> Result<Self, Error> {
        if fields.is_empty() {
            return Err(Error::NoPartitionByFields);
        }
        self.partition_bys.extend(fields);
        Ok(self)
    }

    /// Appends fields to the PARTITION BY list; an empty iterable is a no-op.
    pub fn partition_by_iter<I>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = Expression>,
    {
        self.partition_bys.extend(fields);
        self
    }

    /// Appends fields to the ORDER BY list, preserving call order across
    /// multiple invocations. Fields without an explicit direction are
    /// normalized to ascending when the window function is built. An explicit
    /// call with zero fields is rejected; to pass a possibly-empty collection
    /// use [`order_by_iter`](Self::order_by_iter).
    pub fn order_by(mut self, fields: Vec<Expression>) -> Result<Self, Error> {
        if fields.is_empty() {
            return Err(Error::NoOrderByFields);
        }
        self.order_bys.extend(fields);
        Ok(self)
    }

    /// Appends fields to the ORDER BY list; an empty iterable is a no-op.
    pub fn order_by_iter<I>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = Expression>,
    {
        self.order_bys.extend(fields);
        self
    }

    /// Sets the output alias. The last call wins.
    pub fn as_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    /// Builds the [`WindowFunction`], snapshotting the accumulated lists and
    /// normalizing any directionless order-by field reference to ascending.
    pub fn build(self) -> WindowFunction {
        let order_bys = self
            .order_bys
            .into_iter()
            .map(set_ascending_if_unset)
            .collect();
        WindowFunction {
            alias: self.alias,
            function: Box::new(Expression::Function(self.function)),
            order_bys,
            partition_bys: self.partition_bys,
        }
    }
}

/// Normalization applied once, at build time. Field references that carry no
/// direction become ascending; everything else passes through untouched.
fn set_ascending_if_unset(field: Expression) -> Expression {
    match field {
        Expression::FieldReference(reference)
            if reference.direction == Direction::None =>
        {
            Expression::FieldReference(FieldReference {
                direction: Direction::Ascending,
                ..reference
            })
        }
        other => other,
    }
}
