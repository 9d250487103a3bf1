use std::fmt::{self, Display};

use phf::phf_map;

/// Size of the original token buffer; lexemes keep at most
/// `MAX_TOKEN_LEN - 1` characters and the rest is silently dropped.
pub const MAX_TOKEN_LEN: usize = 100;

pub static KEYWORDS: phf::Map<&'static str, Token> = phf_map! {
    "int" => Token::Int,
    "if" => Token::If,
};

/// A classified lexical unit. Variants that need it carry the matched text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Token {
    Int,
    If,
    Ident(String),
    Num(String),
    Assign,
    DoubleEqual,
    Plus,
    Minus,
    OpenCurlyBrace,
    CloseCurlyBrace,
    OpenParen,
    CloseParen,
    SemiColon,
    Eof,
}

impl Display for Token {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        use Token::*;

        match self {
            Int => fmt.write_str("keyword `int`"),
            If => fmt.write_str("keyword `if`"),
            Ident(name) => write!(fmt, "identifier `{}`", name),
            Num(text) => write!(fmt, "number `{}`", text),
            Assign => fmt.write_str("`=`"),
            DoubleEqual => fmt.write_str("`==`"),
            Plus => fmt.write_str("`+`"),
            Minus => fmt.write_str("`-`"),
            OpenCurlyBrace => fmt.write_str("`{`"),
            CloseCurlyBrace => fmt.write_str("`}`"),
            OpenParen => fmt.write_str("`(`"),
            CloseParen => fmt.write_str("`)`"),
            SemiColon => fmt.write_str("`;`"),
            Eof => fmt.write_str("end of input"),
        }
    }
}
