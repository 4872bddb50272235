// Error reporting with Ariadne
//
// This module turns chumsky errors into annotated reports that point into
// the matrix literal the user typed.

use ariadne::{Color, Config, IndexType, Label, Report, ReportKind, Source};
use chumsky::error::{Simple, SimpleReason};
use lexer::token::Token;
use std::io::{self, Write};
use std::ops::Range;

/// Type alias for Chumsky parser errors
pub type ParseError = Simple<Token>;

/// Print every error as an Ariadne report on stderr
pub fn report_errors(
    filename: &str,
    source: &str,
    errors: &[ParseError],
    color: bool,
) -> io::Result<()> {
    write_errors(filename, source, errors, color, io::stderr())
}

/// Render every error as an Ariadne report into `out`
pub fn write_errors<W: Write>(
    filename: &str,
    source: &str,
    errors: &[ParseError],
    color: bool,
    mut out: W,
) -> io::Result<()> {
    for error in errors {
        let span = clamp(error.span(), source.len());
        let msg = describe(error);

        let report = Report::build(ReportKind::Error, filename, span.start)
            .with_config(
                Config::default()
                    .with_color(color)
                    .with_index_type(IndexType::Byte),
            )
            .with_code("E001")
            .with_message("Invalid matrix literal")
            .with_label(
                Label::new((filename, span))
                    .with_message(msg)
                    .with_color(Color::Red),
            );

        // Add expected tokens if available (limit to 5 to avoid overwhelming output)
        let report = if error.expected().len() > 0 {
            let mut expected: Vec<String> = error.expected().map(format_expected).collect();
            expected.sort();
            let shown = expected.iter().take(5).cloned().collect::<Vec<_>>();

            let help_msg = if expected.len() > 5 {
                format!("Expected one of: {}, ...", shown.join(", "))
            } else {
                format!("Expected: {}", shown.join(", "))
            };

            report.with_help(help_msg)
        } else {
            report
        };

        // An empty source has nothing to underline, so the label is not drawn
        let report = if source.trim().is_empty() {
            report.with_note("the matrix literal is empty")
        } else {
            report
        };

        report
            .finish()
            .write((filename, Source::from(source)), &mut out)?;
    }

    Ok(())
}

/// One-line description of a parse error, without source context
pub fn describe(error: &ParseError) -> String {
    match error.reason() {
        SimpleReason::Custom(msg) => msg.clone(),
        SimpleReason::Unclosed { delimiter, .. } => {
            format!("unclosed delimiter '{}'", delimiter)
        }
        SimpleReason::Unexpected => match error.found() {
            Some(Token::Error) => "unexpected character".to_string(),
            Some(token) => format!("unexpected {}", format_expected(&Some(token.clone()))),
            None => "unexpected end of input".to_string(),
        },
    }
}

/// Format expected token for human-readable output
fn format_expected(token: &Option<Token>) -> String {
    match token {
        Some(Token::LBracket) => "'['".to_string(),
        Some(Token::RBracket) => "']'".to_string(),
        Some(Token::Comma) => "','".to_string(),
        Some(Token::Plus) => "'+'".to_string(),
        Some(Token::Minus) => "'-'".to_string(),
        Some(Token::Number(_)) => "number".to_string(),
        Some(Token::Identifier(name)) => format!("identifier '{}'", name),
        Some(Token::Error) => "invalid character".to_string(),
        None => "end of input".to_string(),
    }
}

// The end-of-input span sits one past the source; keep labels inside it
fn clamp(span: Range<usize>, len: usize) -> Range<usize> {
    if span.start >= len {
        return len.saturating_sub(1)..len;
    }
    span.start..span.end.min(len)
}
