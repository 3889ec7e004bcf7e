use std::rc::Rc;

use log::trace;

use crate::{Position, Span, MK_SPAN, MK_TOKEN};

use super::tokens::{Token, TokenKind};

/// Pull-based scanner with a single character of lookahead.
///
/// Once the end of the input is reached every further call to
/// [`Lexer::next_token`] returns another `Eof` token at the same position.
#[derive(Clone)]
pub struct Lexer {
    source: Vec<char>,
    /// Index of `ch`
    position: usize,
    /// Index of the character after `ch`
    read_position: usize,
    /// Current character, NUL once past the end
    ch: char,
    file: Rc<String>,
}

impl Lexer {
    pub fn new(source: &str, file: Option<String>) -> Lexer {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        let mut lexer = Lexer {
            source: source.chars().collect(),
            position: 0,
            read_position: 0,
            ch: '\0',
            file: file_name,
        };
        lexer.read_char();
        lexer
    }

    /// Name of the input being scanned.
    pub fn file(&self) -> Rc<String> {
        Rc::clone(&self.file)
    }

    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let start = self.position;
        let ch = self.ch;
        let token = match ch {
            '\0' if self.at_eof() => {
                let span = MK_SPAN!(start, start, self.file);
                return self.emit(MK_TOKEN!(TokenKind::Eof, String::new(), span));
            }
            '=' if self.peek_char() == '=' => self.two_char_token(TokenKind::Eq),
            '!' if self.peek_char() == '=' => self.two_char_token(TokenKind::NotEq),
            ch if is_letter(ch) => {
                let literal = self.read_while(|c| is_letter(c) || c.is_ascii_digit());
                let kind = TokenKind::lookup_ident(&literal);
                let span = MK_SPAN!(start, self.position, self.file);
                return self.emit(MK_TOKEN!(kind, literal, span));
            }
            ch if ch.is_ascii_digit() => {
                let literal = self.read_while(|c| c.is_ascii_digit());
                let span = MK_SPAN!(start, self.position, self.file);
                return self.emit(MK_TOKEN!(TokenKind::Int, literal, span));
            }
            ch => {
                let span = MK_SPAN!(start, start + 1, self.file);
                MK_TOKEN!(TokenKind::from_char(ch), ch.to_string(), span)
            }
        };

        self.read_char();
        self.emit(token)
    }

    pub fn at_eof(&self) -> bool {
        self.position >= self.source.len()
    }

    fn emit(&self, token: Token) -> Token {
        trace!("{}:{} {}", self.file, token.span.start.0, token);
        token
    }

    /// Consumes the first character of a two character operator; the caller
    /// consumes the second.
    fn two_char_token(&mut self, kind: TokenKind) -> Token {
        let start = self.position;
        let first = self.ch;
        self.read_char();
        MK_TOKEN!(kind, format!("{}{}", first, self.ch), MK_SPAN!(start, start + 2, self.file))
    }

    fn read_char(&mut self) {
        self.ch = self.source.get(self.read_position).copied().unwrap_or('\0');
        self.position = self.read_position;
        self.read_position += 1;
    }

    fn peek_char(&self) -> char {
        self.source.get(self.read_position).copied().unwrap_or('\0')
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.ch, ' ' | '\t' | '\n' | '\r') {
            self.read_char();
        }
    }

    fn read_while(&mut self, predicate: fn(char) -> bool) -> String {
        let start = self.position;
        while !self.at_eof() && predicate(self.ch) {
            self.read_char();
        }

        self.source[start..self.position].iter().collect()
    }
}

fn is_letter(ch: char) -> bool {
    ch.is_ascii_alphabetic() || ch == '_'
}

/// Scans `source` into a vector of tokens terminated by a single `Eof`.
pub fn tokenize(source: &str, file: Option<String>) -> Vec<Token> {
    let mut lex = Lexer::new(source, file);
    let mut tokens = vec![];

    loop {
        let token = lex.next_token();
        let done = token.kind == TokenKind::Eof;
        tokens.push(token);

        if done {
            break;
        }
    }

    tokens
}
