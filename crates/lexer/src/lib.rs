pub mod token;

use logos::Logos;
use std::ops::Range;
use token::Token;

/// Byte range of a token in the source text
pub type Span = Range<usize>;

/// Tokenize a source string, keeping the byte span of every token.
/// Characters the lexer does not recognise become `Token::Error`.
pub fn lex(source: &str) -> Vec<(Token, Span)> {
    Token::lexer(source)
        .spanned()
        .map(|(t, span)| (t.unwrap_or(Token::Error), span))
        .collect()
}

#[cfg(test)]
mod tests;
