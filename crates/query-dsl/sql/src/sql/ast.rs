//! Type definitions of the SQL expression AST.
//!
//! Every node is an immutable value: once constructed it is never mutated,
//! so trees can be shared freely across threads and embedded in larger trees
//! without defensive copying. Renaming and rewriting always produce new nodes.

use std::fmt;

use enum_iterator::Sequence;
use serde::{Deserialize, Serialize};

use super::window::WindowFunction;

/// A scalar expression carrying an optional output alias.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Expression {
    /// A reference to a column
    FieldReference(FieldReference),
    /// A scalar or aggregate function call
    Function(Function),
    /// An aggregate function evaluated over a window
    WindowFunction(WindowFunction),
    /// An irreducible value
    Literal(Literal),
}

impl Expression {
    /// The output alias of this node, if one was set.
    pub fn alias(&self) -> Option<&str> {
        match self {
            Expression::FieldReference(node) => node.alias.as_deref(),
            Expression::Function(node) => node.alias.as_deref(),
            Expression::WindowFunction(node) => node.alias(),
            Expression::Literal(node) => node.alias.as_deref(),
        }
    }

    /// Shallow rename: a new node with the given alias and the same children
    /// as this one. Children are not rebuilt or re-validated; because nodes
    /// are immutable, sharing their values between the two copies is safe.
    pub fn with_alias(&self, alias: impl Into<String>) -> Expression {
        let alias = Some(alias.into());
        match self {
            Expression::FieldReference(node) => Expression::FieldReference(FieldReference {
                alias,
                ..node.clone()
            }),
            Expression::Function(node) => Expression::Function(Function {
                alias,
                ..node.clone()
            }),
            Expression::WindowFunction(node) => {
                Expression::WindowFunction(node.with_alias(alias))
            }
            Expression::Literal(node) => Expression::Literal(Literal {
                alias,
                ..node.clone()
            }),
        }
    }
}

/// A reference to a database column, optionally qualified by a table name and
/// carrying a sort direction for use inside an ORDER BY list.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FieldReference {
    pub table: Option<TableName>,
    pub name: ColumnName,
    pub direction: Direction,
    pub alias: Option<String>,
}

impl FieldReference {
    /// A copy of this reference with the given sort direction.
    pub fn direction(self, direction: Direction) -> FieldReference {
        FieldReference { direction, ..self }
    }
}

/// A sort direction for a single ORDER BY element. `None` means the query
/// author did not state a direction; the window function builder normalizes
/// it to `Ascending` at build time.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Sequence, Serialize, Deserialize,
)]
pub enum Direction {
    None,
    Ascending,
    Descending,
}

/// A function call over zero or more argument expressions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Function {
    pub kind: FunctionType,
    pub args: Vec<Expression>,
    pub alias: Option<String>,
}

/// The function kinds known to the model.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Sequence, Serialize, Deserialize,
)]
pub enum FunctionType {
    Average,
    Sum,
    Count,
    Min,
    Max,
    Coalesce,
    Greatest,
    Least,
    Trim,
    Length,
    Substring,
    Mod,
}

impl FunctionType {
    /// The aggregate kinds permitted as the basis of a window function.
    pub const WINDOW_COMPATIBLE: &[FunctionType] = &[
        FunctionType::Average,
        FunctionType::Sum,
        FunctionType::Count,
        FunctionType::Min,
        FunctionType::Max,
    ];

    /// Whether a function of this kind may be evaluated over a window.
    pub fn is_window_compatible(self) -> bool {
        Self::WINDOW_COMPATIBLE.contains(&self)
    }
}

/// A literal value with an optional alias.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Literal {
    pub value: Value,
    pub alias: Option<String>,
}

/// Value
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Value {
    Integer(i64),
    Boolean(bool),
    String(String),
    Null,
}

/// A database table name
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TableName(pub String);

/// A database table's column name
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColumnName(pub String);

// Display //
//
// These renderings are diagnostic. Dialect-specific SQL generation lives in
// the rendering layer, which walks the tree itself.

fn write_alias(f: &mut fmt::Formatter<'_>, alias: Option<&str>) -> fmt::Result {
    match alias {
        Some(alias) => write!(f, " AS {alias}"),
        None => Ok(()),
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::FieldReference(node) => node.fmt(f),
            Expression::Function(node) => node.fmt(f),
            Expression::WindowFunction(node) => node.fmt(f),
            Expression::Literal(node) => node.fmt(f),
        }
    }
}

impl fmt::Display for FieldReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(table) = &self.table {
            write!(f, "{}.", table.0)?;
        }
        write!(f, "{}", self.name.0)?;
        match self.direction {
            Direction::None => {}
            Direction::Ascending => write!(f, " ASC")?,
            Direction::Descending => write!(f, " DESC")?,
        }
        write_alias(f, self.alias.as_deref())
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.kind)?;
        for (index, arg) in self.args.iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{arg}")?;
        }
        write!(f, ")")?;
        write_alias(f, self.alias.as_deref())
    }
}

impl fmt::Display for FunctionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FunctionType::Average => "AVERAGE",
            FunctionType::Sum => "SUM",
            FunctionType::Count => "COUNT",
            FunctionType::Min => "MIN",
            FunctionType::Max => "MAX",
            FunctionType::Coalesce => "COALESCE",
            FunctionType::Greatest => "GREATEST",
            FunctionType::Least => "LEAST",
            FunctionType::Trim => "TRIM",
            FunctionType::Length => "LENGTH",
            FunctionType::Substring => "SUBSTRING",
            FunctionType::Mod => "MOD",
        };
        f.write_str(name)
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Value::Integer(i) => write!(f, "{i}")?,
            Value::Boolean(b) => write!(f, "{b}")?,
            Value::String(s) => write!(f, "'{s}'")?,
            Value::Null => write!(f, "NULL")?,
        }
        write_alias(f, self.alias.as_deref())
    }
}
