//! Minimal token builder so tests can be written as dialog source.
//!
//! Covers just what the fixtures need: `//` and `/* */` comments, string
//! literals with backslash escapes, `#directives`, punctuation, integer
//! literals (decimal, hex, negative, suffixed) and words. Words in
//! `KEYWORDS` become keywords, everything else an identifier.

use dlg_ir::{Location, Token, TokenKind};

const KEYWORDS: &[&str] = &[
    "begin_dialog_definition_ex_",
    "end_dialog_definition_ex_",
    "begin_dialog_properties",
    "end_dialog_properties",
    "define_dialog_property",
    "declare_control",
    "begin_control_definitions",
    "end_control_definitions",
    "begin_control_ex",
    "end_control_ex",
    "define_property",
    "BEGIN_LAYERS",
    "END_LAYERS",
    "BEGIN_LAYER",
    "END_LAYER",
];

struct Lexer {
    chars: Vec<char>,
    pos: usize,
    line: u32,
    column: u32,
}

impl Lexer {
    fn peek(&self, offset: usize) -> Option<char> {
        self.chars.get(self.pos + offset).copied()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek(0)?;
        self.pos += 1;
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(c)
    }

    fn take_while(&mut self, pred: impl Fn(char) -> bool) -> String {
        let mut text = String::new();
        while let Some(c) = self.peek(0) {
            if !pred(c) {
                break;
            }
            text.push(c);
            self.bump();
        }
        text
    }

    fn string(&mut self) -> String {
        self.bump();
        let mut text = String::new();
        loop {
            match self.bump() {
                Some('"') => return text,
                Some('\\') => text.extend(self.bump()),
                Some(c) => text.push(c),
                None => panic!("unterminated string literal"),
            }
        }
    }

    fn block_comment(&mut self) -> String {
        self.bump();
        self.bump();
        let mut text = String::new();
        while !(self.peek(0) == Some('*') && self.peek(1) == Some('/')) {
            match self.bump() {
                Some(c) => text.push(c),
                None => panic!("unterminated block comment"),
            }
        }
        self.bump();
        self.bump();
        text
    }
}

fn is_word(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Turn `source` into tokens.
pub(crate) fn lex(source: &str) -> Vec<Token> {
    let mut lexer = Lexer {
        chars: source.chars().collect(),
        pos: 0,
        line: 1,
        column: 1,
    };
    let mut tokens = Vec::new();

    while let Some(c) = lexer.peek(0) {
        let location = Location::new(lexer.line, lexer.column);
        let (kind, value) = match c {
            c if c.is_whitespace() => {
                lexer.bump();
                continue;
            }
            '/' if lexer.peek(1) == Some('/') => {
                lexer.bump();
                lexer.bump();
                (TokenKind::Comment, lexer.take_while(|c| c != '\n'))
            }
            '/' if lexer.peek(1) == Some('*') => (TokenKind::Comment, lexer.block_comment()),
            '"' => (TokenKind::String, lexer.string()),
            '#' => {
                lexer.bump();
                let word = lexer.take_while(is_word);
                (TokenKind::Directive, format!("#{word}"))
            }
            ',' | '|' | '(' | ')' => {
                lexer.bump();
                let kind = match c {
                    ',' => TokenKind::Comma,
                    '|' => TokenKind::LogicalOr,
                    '(' => TokenKind::OpenParen,
                    _ => TokenKind::CloseParen,
                };
                (kind, c.to_string())
            }
            '-' if lexer.peek(1).is_some_and(|c| c.is_ascii_digit()) => {
                lexer.bump();
                let digits = lexer.take_while(is_word);
                (TokenKind::Number, format!("-{digits}"))
            }
            c if c.is_ascii_digit() => (TokenKind::Number, lexer.take_while(is_word)),
            c if is_word(c) => {
                let word = lexer.take_while(is_word);
                let kind = if KEYWORDS.contains(&word.as_str()) {
                    TokenKind::Keyword
                } else {
                    TokenKind::Identifier
                };
                (kind, word)
            }
            other => panic!("unexpected character {other:?} at {location}"),
        };
        tokens.push(Token::new(kind, value, location));
    }

    tokens
}

#[test]
fn test_lex_mixed_input() {
    let tokens = lex("#include \"res.h\" // Version [1.2]\nfoo(WS_A | 0x10, -1)");
    let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        [
            TokenKind::Directive,
            TokenKind::String,
            TokenKind::Comment,
            TokenKind::Identifier,
            TokenKind::OpenParen,
            TokenKind::Identifier,
            TokenKind::LogicalOr,
            TokenKind::Number,
            TokenKind::Comma,
            TokenKind::Number,
            TokenKind::CloseParen,
        ]
    );
    assert_eq!(tokens[0].value, "#include");
    assert_eq!(tokens[1].value, "res.h");
    assert_eq!(tokens[2].value, " Version [1.2]");
    assert_eq!(tokens[3].location, Location::new(2, 1));
    assert_eq!(tokens[9].value, "-1");
}

#[test]
fn test_lex_escaped_quotes() {
    let tokens = lex(r#""{[A=\"\"x\"\"]}Caption=\"""#);
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].value, r#"{[A=""x""]}Caption=""#);
}
