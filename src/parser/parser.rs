use std::mem;

use thiserror::Error;

use crate::lexer::{Lexer, Token};

use super::{BinOpKind, Expr, Program, Stmt};

/// A syntax error. Every variant is fatal: the parser stops at the first
/// token that violates the grammar and returns no partial tree.
#[derive(Error, Debug, PartialEq)]
pub enum ParseError {
    #[error("expected {expected}, found {found}")]
    Expected { expected: Token, found: Token },

    #[error("expected an identifier, found {0}")]
    ExpectedIdent(Token),

    #[error("unexpected token {0}")]
    Unexpected(Token),
}

/// Recursive-descent parser with one token of lookahead.
///
/// Tokens are pulled from the [`Lexer`] on demand; `token` always holds
/// the next unconsumed one.
#[derive(Debug)]
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    token: Token,
}

impl<'a> Parser<'a> {
    pub fn new(mut lexer: Lexer<'a>) -> Self {
        let token = lexer.next_token();
        Self { lexer, token }
    }

    /// Advances the lookahead, returning the token just consumed.
    fn bump(&mut self) -> Token {
        mem::replace(&mut self.token, self.lexer.next_token())
    }

    fn consume(&mut self, token: &Token) -> bool {
        if &self.token != token {
            return false;
        }
        self.bump();
        true
    }

    fn expect(&mut self, token: Token) -> Result<(), ParseError> {
        if self.token != token {
            return Err(ParseError::Expected {
                expected: token,
                found: self.token.clone(),
            });
        }
        self.bump();
        Ok(())
    }

    fn expect_ident(&mut self) -> Result<String, ParseError> {
        match self.token.clone() {
            Token::Ident(name) => {
                self.bump();
                Ok(name)
            }
            t => Err(ParseError::ExpectedIdent(t)),
        }
    }

    /// program = stmt*
    pub fn parse(&mut self) -> Result<Program, ParseError> {
        let mut stmts = vec![];

        while self.token != Token::Eof {
            stmts.push(self.parse_stmt()?);
        }

        Ok(Program(stmts))
    }

    /// stmt = "int" ident ";"
    ///      | "if" "(" expr ")" "{" stmt "}"
    ///      | ident "=" expr ";"
    fn parse_stmt(&mut self) -> Result<Stmt, ParseError> {
        if self.consume(&Token::Int) {
            self.parse_var_decl()
        } else if self.consume(&Token::If) {
            self.parse_if()
        } else if matches!(self.token, Token::Ident(_)) {
            self.parse_assign()
        } else {
            Err(ParseError::Unexpected(self.token.clone()))
        }
    }

    /// var-decl = ident ";"  ("int" already consumed)
    fn parse_var_decl(&mut self) -> Result<Stmt, ParseError> {
        let name = self.expect_ident()?;
        self.expect(Token::SemiColon)?;
        Ok(Stmt::VarDecl(name))
    }

    /// if-stmt = "(" expr ")" "{" stmt "}"  ("if" already consumed)
    fn parse_if(&mut self) -> Result<Stmt, ParseError> {
        self.expect(Token::OpenParen)?;
        let condition = self.parse_expr()?;
        self.expect(Token::CloseParen)?;
        self.expect(Token::OpenCurlyBrace)?;
        let body = self.parse_stmt()?;
        self.expect(Token::CloseCurlyBrace)?;
        Ok(Stmt::If(condition, Box::new(body)))
    }

    /// assign = ident "=" expr ";"
    fn parse_assign(&mut self) -> Result<Stmt, ParseError> {
        let name = self.expect_ident()?;
        self.expect(Token::Assign)?;
        let expr = self.parse_expr()?;
        self.expect(Token::SemiColon)?;
        Ok(Stmt::Assign(name, expr))
    }

    /// expr = term
    ///
    /// Note that `==` has no production anywhere below this point, even
    /// though the lexer tokenizes it. An equality inside an `if` condition
    /// therefore fails at the `)` the enclosing production expects next.
    fn parse_expr(&mut self) -> Result<Expr, ParseError> {
        self.parse_term()
    }

    /// term = factor (("+" | "-") factor)*
    fn parse_term(&mut self) -> Result<Expr, ParseError> {
        let mut node = self.parse_factor()?;

        loop {
            let op = if self.consume(&Token::Plus) {
                BinOpKind::Add
            } else if self.consume(&Token::Minus) {
                BinOpKind::Sub
            } else {
                return Ok(node);
            };
            let rhs = self.parse_factor()?;
            node = Expr::Binary(op, Box::new(node), Box::new(rhs));
        }
    }

    /// factor = num | ident | "(" expr ")"
    fn parse_factor(&mut self) -> Result<Expr, ParseError> {
        match self.token.clone() {
            Token::Num(text) => {
                self.bump();
                Ok(Expr::Num(text))
            }
            Token::Ident(name) => {
                self.bump();
                Ok(Expr::Var(name))
            }
            Token::OpenParen => {
                self.bump();
                let expr = self.parse_expr()?;
                self.expect(Token::CloseParen)?;
                Ok(expr)
            }
            t => Err(ParseError::Unexpected(t)),
        }
    }
}
