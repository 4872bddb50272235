use crate::ast::{Node, NodeKind, Span};
use crate::error::ParseError;
use chumsky::prelude::*;
use chumsky::error::SimpleReason;
use chumsky::Stream;
use lexer::token::Token;

/// Grammar for nested-list literals:
///
/// ```text
/// value  := sign? NUMBER | '[' (value (',' value)* ','?)? ']'
/// sign   := '+' | '-'
/// ```
pub fn parser() -> impl Parser<Token, Node, Error = Simple<Token>> {
    value_parser().then_ignore(end())
}

fn value_parser() -> impl Parser<Token, Node, Error = Simple<Token>> {
    let sign = just(Token::Minus)
        .to(-1.0)
        .or(just(Token::Plus).to(1.0))
        .or_not()
        .map(|s| s.unwrap_or(1.0));

    // filter_map rather than select! so that `number` lands in the expected set
    let digits = filter_map(|span, token| match token {
        Token::Number(text) => Ok(text),
        other => Err(Simple::expected_input_found(
            span,
            Some(Some(Token::Number(String::new()))),
            Some(other),
        )),
    });

    let number = sign
        .then(digits)
        .try_map(|(sign, text), span: Span| {
            let value: f64 = match text.parse() {
                Ok(value) => value,
                Err(_) => {
                    return Err(Simple::custom(span, format!("invalid number '{}'", text)));
                }
            };

            // "1e999" parses as infinity; only finite values are numbers here
            if !value.is_finite() {
                return Err(Simple::custom(
                    span,
                    format!("number '{}' is out of range", text),
                ));
            }

            Ok(Node::new(NodeKind::Number(sign * value), span))
        });

    recursive(|value| {
        let list = value
            .separated_by(just(Token::Comma))
            .allow_trailing()
            .delimited_by(just(Token::LBracket), just(Token::RBracket))
            .map_with_span(|items, span| Node::new(NodeKind::List(items), span));

        number.or(list)
    })
}

/// Lex and parse a literal, keeping byte spans for error reporting
pub fn parse_literal(source: &str) -> Result<Node, Vec<ParseError>> {
    let tokens = lexer::lex(source);
    let eoi = source.len()..source.len() + 1;

    parser()
        .parse(Stream::from_iter(eoi, tokens.into_iter()))
        .map_err(|errors| errors.into_iter().map(expect_number_at_end).collect())
}

// filter_map is not consulted once the input runs out, so an error where a
// value could start (a sign is expected) is missing `number`
fn expect_number_at_end(error: ParseError) -> ParseError {
    let starts_value = error.expected().any(|token| token == &Some(Token::Minus));
    let has_number = error
        .expected()
        .any(|token| matches!(token, Some(Token::Number(_))));

    if error.found().is_some()
        || !starts_value
        || has_number
        || !matches!(error.reason(), SimpleReason::Unexpected)
    {
        return error;
    }

    let expected = error
        .expected()
        .cloned()
        .chain(Some(Some(Token::Number(String::new()))))
        .collect::<Vec<_>>();
    Simple::expected_input_found(error.span(), expected, None)
}
