//! Expression tree produced by the parser.
//!
//! `Expr` is a closed sum type: adding a new expression kind forces every
//! consumer's `match` to be updated, which is the point. Nodes are pure
//! data with no behaviour beyond structural equality; the parser builds the
//! tree bottom-up and the caller owns it exclusively afterwards.

/// A constant value. `Unit` stands for "no value": it is what an empty
/// block, a block ending in `;`, or an untaken absent `else` produce, so a
/// downstream evaluator can match on it instead of a null.
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    Int(i64),
    Bool(bool),
    Unit,
}

/// A variable or function reference.
#[derive(Debug, Clone, PartialEq)]
pub struct Identifier {
    pub name: String,
}

impl Identifier {
    pub fn new(name: &str) -> Self {
        Identifier {
            name: String::from(name),
        }
    }
}

/// A lexical operator, embedded in `UnaryOp` / `BinaryOp` nodes.
#[derive(Debug, Clone, PartialEq)]
pub struct Operator {
    pub symbol: String,
}

impl Operator {
    pub fn new(symbol: &str) -> Self {
        Operator {
            symbol: String::from(symbol),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Literal(LiteralValue),
    Identifier(Identifier),
    /// Call site. `arguments` is `None` for an empty argument list `()`,
    /// distinct from a present-but-empty list.
    FunctionCall {
        callee: Identifier,
        arguments: Option<Vec<Expr>>,
    },
    UnaryOp {
        operator: Operator,
        operand: Box<Expr>,
    },
    BinaryOp {
        left: Box<Expr>,
        operator: Operator,
        right: Box<Expr>,
    },
    /// `if cond then A [else B]`. An absent else-branch yields `Unit` when
    /// the condition is false; the tree simply omits the branch.
    TernaryOp {
        condition: Box<Expr>,
        then_branch: Box<Expr>,
        else_branch: Option<Box<Expr>>,
    },
    /// `while cond do body` - evaluated for effect, produces no value.
    WhileStatement {
        condition: Box<Expr>,
        body: Box<Expr>,
    },
    /// `{ s1; s2; ...; result }`. Statements run for effect in order; only
    /// `result` produces the block's value (`Unit` when the block is empty
    /// or ends in `;`).
    Block {
        statements: Vec<Expr>,
        result: Box<Expr>,
    },
    /// `var name = initializer` binding declaration.
    Variable {
        identifier: Identifier,
        initializer: Box<Expr>,
    },
}

impl Expr {
    pub fn int(value: i64) -> Expr {
        Expr::Literal(LiteralValue::Int(value))
    }

    pub fn bool(value: bool) -> Expr {
        Expr::Literal(LiteralValue::Bool(value))
    }

    pub fn unit() -> Expr {
        Expr::Literal(LiteralValue::Unit)
    }

    pub fn identifier(name: &str) -> Expr {
        Expr::Identifier(Identifier::new(name))
    }

    pub fn binary(left: Expr, symbol: &str, right: Expr) -> Expr {
        Expr::BinaryOp {
            left: Box::new(left),
            operator: Operator::new(symbol),
            right: Box::new(right),
        }
    }

    pub fn unary(symbol: &str, operand: Expr) -> Expr {
        Expr::UnaryOp {
            operator: Operator::new(symbol),
            operand: Box::new(operand),
        }
    }
}
