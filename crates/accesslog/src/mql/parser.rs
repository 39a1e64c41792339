//! Recursive-descent parser from tokens to a [`QueryIntent`].

use super::lexer::{tokenize, Token, TokenKind};
use super::model::{Condition, QueryError, QueryIntent, Selector};
use crate::filter::Window;
use crate::parser::date::parse_timestamp;
use crate::parser::{Event, Status};

/// Parse a whole query. Trailing tokens are an error.
pub fn parse(input: &str) -> Result<QueryIntent, QueryError> {
    let tokens = tokenize(input)?;
    if tokens.is_empty() {
        return Err(QueryError::Empty);
    }

    let mut parser = Parser { tokens, pos: 0 };
    let intent = parser.query()?;
    parser.end()?;
    Ok(intent)
}

struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser {
    fn query(&mut self) -> Result<QueryIntent, QueryError> {
        self.keyword("get")?;
        let select = self.selector()?;

        let condition = if self.peek_keyword("for") {
            self.pos += 1;
            let field = self.selector()?;
            self.equals()?;
            let value = self.quoted()?;
            Some(build_condition(field, value)?)
        } else {
            None
        };

        let window = if self.peek_keyword("and") {
            self.pos += 1;
            self.keyword("date")?;
            self.keyword("between")?;
            let after = date_literal(self.quoted()?)?;
            self.keyword("and")?;
            let before = date_literal(self.quoted()?)?;
            Some(Window::between(after, before))
        } else {
            None
        };

        Ok(QueryIntent { select, condition, window })
    }

    fn end(&self) -> Result<(), QueryError> {
        match self.tokens.get(self.pos) {
            None => Ok(()),
            Some(token) => Err(QueryError::UnexpectedToken {
                expected: "end of query",
                found: token.describe(),
                offset: token.offset,
            }),
        }
    }

    fn next(&mut self, expected: &'static str) -> Result<&Token, QueryError> {
        let token = self
            .tokens
            .get(self.pos)
            .ok_or(QueryError::UnexpectedEnd { expected })?;
        self.pos += 1;
        Ok(token)
    }

    fn peek_keyword(&self, keyword: &str) -> bool {
        matches!(
            self.tokens.get(self.pos),
            Some(Token { kind: TokenKind::Word(word), .. }) if word == keyword
        )
    }

    fn keyword(&mut self, keyword: &'static str) -> Result<(), QueryError> {
        let token = self.next(keyword)?;
        match &token.kind {
            TokenKind::Word(word) if word == keyword => Ok(()),
            _ => Err(QueryError::UnexpectedToken {
                expected: keyword,
                found: token.describe(),
                offset: token.offset,
            }),
        }
    }

    fn selector(&mut self) -> Result<Selector, QueryError> {
        let token = self.next("a selector")?;
        match &token.kind {
            TokenKind::Word(word) => Selector::from_keyword(word).ok_or_else(|| QueryError::UnknownSelector {
                found: word.clone(),
                offset: token.offset,
            }),
            _ => Err(QueryError::UnexpectedToken {
                expected: "a selector",
                found: token.describe(),
                offset: token.offset,
            }),
        }
    }

    fn equals(&mut self) -> Result<(), QueryError> {
        let token = self.next("=")?;
        match token.kind {
            TokenKind::Equals => Ok(()),
            _ => Err(QueryError::UnexpectedToken {
                expected: "=",
                found: token.describe(),
                offset: token.offset,
            }),
        }
    }

    fn quoted(&mut self) -> Result<String, QueryError> {
        let token = self.next("a quoted literal")?;
        match &token.kind {
            TokenKind::Quoted(text) => Ok(text.clone()),
            _ => Err(QueryError::UnexpectedToken {
                expected: "a quoted literal",
                found: token.describe(),
                offset: token.offset,
            }),
        }
    }
}

fn build_condition(field: Selector, value: String) -> Result<Condition, QueryError> {
    Ok(match field {
        Selector::Ip => Condition::Ip(value),
        Selector::User => Condition::User(value),
        Selector::Date => Condition::Date(date_literal(value)?),
        Selector::Event => Condition::Event(Event::from_name(&value).ok_or(QueryError::UnknownEvent(value))?),
        Selector::Status => Condition::Status(Status::from_name(&value).ok_or(QueryError::UnknownStatus(value))?),
    })
}

fn date_literal(text: String) -> Result<chrono::NaiveDateTime, QueryError> {
    parse_timestamp(&text).ok_or(QueryError::InvalidDate(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ts(text: &str) -> chrono::NaiveDateTime {
        parse_timestamp(text).unwrap()
    }

    #[test]
    fn test_parse_selector_only() {
        let intent = parse("get status").unwrap();
        assert_eq!(intent.select, Selector::Status);
        assert_eq!(intent.condition, None);
        assert_eq!(intent.window, None);
    }

    #[test]
    fn test_parse_with_condition() {
        let intent = parse(r#"get ip for user = "Vasya Pupkin""#).unwrap();
        assert_eq!(intent.select, Selector::Ip);
        assert_eq!(intent.condition, Some(Condition::User("Vasya Pupkin".to_string())));

        let intent = parse(r#"get user for event = "DONE_TASK""#).unwrap();
        assert_eq!(intent.condition, Some(Condition::Event(Event::DoneTask)));

        let intent = parse(r#"get date for status = "FAILED""#).unwrap();
        assert_eq!(intent.condition, Some(Condition::Status(Status::Failed)));

        let intent = parse(r#"get event for date = "30.8.2012 16:8:40""#).unwrap();
        assert_eq!(intent.condition, Some(Condition::Date(ts("30.8.2012 16:8:40"))));
    }

    #[test]
    fn test_parse_with_condition_and_window() {
        let intent = parse(
            r#"get ip for user = "Vasya Pupkin" and date between "1.1.2014 0:0:0" and "1.1.2015 0:0:0""#,
        )
        .unwrap();
        assert_eq!(intent.condition, Some(Condition::User("Vasya Pupkin".to_string())));
        assert_eq!(intent.window, Some(Window::between(ts("1.1.2014 0:0:0"), ts("1.1.2015 0:0:0"))));
    }

    #[test]
    fn test_parse_window_without_condition() {
        let intent = parse(r#"get user and date between "1.1.2014 0:0:0" and "1.1.2015 0:0:0""#).unwrap();
        assert_eq!(intent.condition, None);
        assert!(intent.window.is_some());
    }

    #[test]
    fn test_parse_empty() {
        assert_eq!(parse(""), Err(QueryError::Empty));
        assert_eq!(parse("  \t "), Err(QueryError::Empty));
    }

    #[test]
    fn test_parse_keywords_are_case_sensitive() {
        assert!(matches!(parse("GET ip"), Err(QueryError::UnexpectedToken { expected: "get", .. })));
        assert!(matches!(parse("get IP"), Err(QueryError::UnknownSelector { .. })));
    }

    #[test]
    fn test_parse_unknown_selector() {
        assert_eq!(
            parse("get host"),
            Err(QueryError::UnknownSelector { found: "host".to_string(), offset: 4 })
        );
    }

    #[test]
    fn test_parse_missing_pieces() {
        assert_eq!(parse("get"), Err(QueryError::UnexpectedEnd { expected: "a selector" }));
        assert_eq!(parse("get ip for user"), Err(QueryError::UnexpectedEnd { expected: "=" }));
        assert!(matches!(
            parse("get ip for user = Vasya"),
            Err(QueryError::UnexpectedToken { expected: "a quoted literal", .. })
        ));
        assert!(matches!(
            parse(r#"get ip and date after "1.1.2014 0:0:0""#),
            Err(QueryError::UnexpectedToken { expected: "between", .. })
        ));
    }

    #[test]
    fn test_parse_rejects_trailing_input() {
        let err = parse("get ip please").unwrap_err();
        assert_eq!(
            err,
            QueryError::UnexpectedToken {
                expected: "end of query",
                found: "please".to_string(),
                offset: 7,
            }
        );
    }

    #[test]
    fn test_parse_window_before_condition_is_rejected() {
        let result = parse(r#"get ip and date between "1.1.2014 0:0:0" and "1.1.2015 0:0:0" for user = "x""#);
        assert!(matches!(result, Err(QueryError::UnexpectedToken { expected: "end of query", .. })));
    }

    #[test]
    fn test_parse_invalid_literals() {
        assert_eq!(
            parse(r#"get ip for date = "yesterday""#),
            Err(QueryError::InvalidDate("yesterday".to_string()))
        );
        assert_eq!(
            parse(r#"get ip for event = "LOGOUT""#),
            Err(QueryError::UnknownEvent("LOGOUT".to_string()))
        );
        assert_eq!(
            parse(r#"get ip for status = "ok""#),
            Err(QueryError::UnknownStatus("ok".to_string()))
        );
        assert_eq!(
            parse(r#"get ip and date between "1.1.2014 0:0:0" and "soon""#),
            Err(QueryError::InvalidDate("soon".to_string()))
        );
    }

    #[test]
    fn test_parse_unknown_enum_name_is_not_accepted() {
        assert_eq!(
            parse(r#"get ip for event = "UNKNOWN""#),
            Err(QueryError::UnknownEvent("UNKNOWN".to_string()))
        );
    }
}
