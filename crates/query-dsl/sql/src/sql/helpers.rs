//! Helpers for building sql::ast types in certain shapes and patterns.

use super::ast::*;

// Fields //

/// An unqualified column reference with no explicit sort direction.
pub fn field(name: impl Into<String>) -> Expression {
    Expression::FieldReference(FieldReference {
        table: None,
        name: ColumnName(name.into()),
        direction: Direction::None,
        alias: None,
    })
}

/// A table-qualified column reference.
pub fn field_in_table(table: impl Into<String>, name: impl Into<String>) -> Expression {
    Expression::FieldReference(FieldReference {
        table: Some(TableName(table.into())),
        name: ColumnName(name.into()),
        direction: Direction::None,
        alias: None,
    })
}

/// A column reference carrying an explicit sort direction.
pub fn ordered_field(name: impl Into<String>, direction: Direction) -> Expression {
    Expression::FieldReference(FieldReference {
        table: None,
        name: ColumnName(name.into()),
        direction,
        alias: None,
    })
}

// Functions //

fn function_of(kind: FunctionType, args: Vec<Expression>) -> Function {
    Function {
        kind,
        args,
        alias: None,
    }
}

/// `SUM(arg)`
pub fn sum(arg: Expression) -> Function {
    function_of(FunctionType::Sum, vec![arg])
}

/// `COUNT(arg)`
pub fn count(arg: Expression) -> Function {
    function_of(FunctionType::Count, vec![arg])
}

/// `AVERAGE(arg)`
pub fn average(arg: Expression) -> Function {
    function_of(FunctionType::Average, vec![arg])
}

/// `MIN(arg)`
pub fn min(arg: Expression) -> Function {
    function_of(FunctionType::Min, vec![arg])
}

/// `MAX(arg)`
pub fn max(arg: Expression) -> Function {
    function_of(FunctionType::Max, vec![arg])
}

/// `COALESCE(args...)`
pub fn coalesce(args: Vec<Expression>) -> Function {
    function_of(FunctionType::Coalesce, args)
}

/// `LENGTH(arg)`
pub fn length(arg: Expression) -> Function {
    function_of(FunctionType::Length, vec![arg])
}

// Literals //

/// An integer literal.
pub fn literal(value: i64) -> Expression {
    Expression::Literal(Literal {
        value: Value::Integer(value),
        alias: None,
    })
}

/// A string literal.
pub fn string_literal(value: impl Into<String>) -> Expression {
    Expression::Literal(Literal {
        value: Value::String(value.into()),
        alias: None,
    })
}

/// The NULL literal.
pub fn null_literal() -> Expression {
    Expression::Literal(Literal {
        value: Value::Null,
        alias: None,
    })
}
