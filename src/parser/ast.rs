/// A whole source file: its top-level statements in program order.
#[derive(Clone, Debug, PartialEq)]
pub struct Program(pub Vec<Stmt>);

#[derive(Clone, Debug, PartialEq)]
pub enum Stmt {
    /// `int x;` — reserves a storage slot, generates no code.
    VarDecl(String),
    /// `x = expr;`
    Assign(String, Expr),
    /// `if (cond) { stmt }` — the body is exactly one statement and
    /// there is no `else` branch.
    If(Expr, Box<Stmt>),
}

#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    /// A decimal literal, kept as its matched digit text.
    Num(String),
    Var(String),
    Binary(BinOpKind, Box<Expr>, Box<Expr>),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BinOpKind {
    Add,
    Sub,
}
