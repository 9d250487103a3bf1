use std::iter::Peekable;
use std::str::Chars;

use super::token::{Token, KEYWORDS, MAX_TOKEN_LEN};

/// Pull-based scanner over the source text.
///
/// Tokens are produced one at a time by [`Lexer::next_token`]; no token
/// list is ever materialized, so lexing interleaves with parsing. The
/// scanner cannot fail: whitespace and any character that does not start
/// a token are skipped, and an exhausted input yields [`Token::Eof`] on
/// every further call.
#[derive(Debug)]
pub struct Lexer<'a> {
    chars: Peekable<Chars<'a>>,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            chars: source.chars().peekable(),
        }
    }

    fn read_identifier(&mut self, first: char) -> String {
        let mut text = String::from(first);
        while let Some(c) = self.chars.next_if(|c| c.is_ascii_alphanumeric()) {
            if text.len() < MAX_TOKEN_LEN - 1 {
                text.push(c);
            }
        }
        text
    }

    fn read_number(&mut self, first: char) -> String {
        let mut text = String::from(first);
        while let Some(c) = self.chars.next_if(|c| c.is_ascii_digit()) {
            if text.len() < MAX_TOKEN_LEN - 1 {
                text.push(c);
            }
        }
        text
    }

    pub fn next_token(&mut self) -> Token {
        while let Some(c) = self.chars.next() {
            if c.is_whitespace() {
                continue;
            }

            if c.is_ascii_alphabetic() {
                let text = self.read_identifier(c);
                return match KEYWORDS.get(text.as_str()) {
                    Some(keyword) => keyword.clone(),
                    None => Token::Ident(text),
                };
            }

            if c.is_ascii_digit() {
                return Token::Num(self.read_number(c));
            }

            match c {
                '=' => {
                    return if self.chars.next_if_eq(&'=').is_some() {
                        Token::DoubleEqual
                    } else {
                        Token::Assign
                    };
                }
                '+' => return Token::Plus,
                '-' => return Token::Minus,
                '{' => return Token::OpenCurlyBrace,
                '}' => return Token::CloseCurlyBrace,
                '(' => return Token::OpenParen,
                ')' => return Token::CloseParen,
                ';' => return Token::SemiColon,
                // anything else starts no token and is dropped
                _ => continue,
            }
        }

        Token::Eof
    }
}
