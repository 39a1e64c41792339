//! Tokenizer for the query language.

use super::model::QueryError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    /// Run of characters other than whitespace, `=` and `"`
    Word(String),
    Equals,
    /// Contents of a double-quoted literal, quotes removed
    Quoted(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    /// Byte offset of the token's first character in the input
    pub offset: usize,
}

impl Token {
    /// Short description for error messages.
    pub fn describe(&self) -> String {
        match &self.kind {
            TokenKind::Word(word) => word.clone(),
            TokenKind::Equals => "=".to_string(),
            TokenKind::Quoted(text) => format!("\"{}\"", text),
        }
    }
}

pub fn tokenize(input: &str) -> Result<Vec<Token>, QueryError> {
    let mut tokens = Vec::new();
    let mut chars = input.char_indices().peekable();

    while let Some(&(offset, c)) = chars.peek() {
        if c.is_whitespace() {
            chars.next();
            continue;
        }

        match c {
            '=' => {
                chars.next();
                tokens.push(Token { kind: TokenKind::Equals, offset });
            }
            '"' => {
                chars.next();
                let start = offset + 1;
                let end = loop {
                    match chars.next() {
                        Some((i, '"')) => break i,
                        Some(_) => {}
                        None => return Err(QueryError::UnterminatedLiteral { offset }),
                    }
                };
                tokens.push(Token {
                    kind: TokenKind::Quoted(input[start..end].to_string()),
                    offset,
                });
            }
            _ => {
                let mut end = input.len();
                while let Some(&(i, c)) = chars.peek() {
                    if c.is_whitespace() || c == '=' || c == '"' {
                        end = i;
                        break;
                    }
                    chars.next();
                }
                tokens.push(Token {
                    kind: TokenKind::Word(input[offset..end].to_string()),
                    offset,
                });
            }
        }
    }

    Ok(tokens)
}
