use logos::Logos;
use std::fmt;

#[derive(Logos, Debug, PartialEq, Eq, Hash, Clone)]
#[logos(skip r"[ \t\r\n\f]+")] // Ignore spaces, tabs and line breaks automatically
pub enum Token {
    // --- Literals ---

    // Numbers (ex: 42, 3.14, 1., .5, 6.02e23)
    // Kept as text so the token stays hashable; the parser converts to f64.
    #[regex(r"([0-9]+(\.[0-9]*)?|\.[0-9]+)([eE][+-]?[0-9]+)?", |lex| lex.slice().to_string())]
    Number(String),

    // Words are never valid inside a matrix, but lexing them lets the parser
    // point at them (ex: "[[1, x]]", "nan", "inf")
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),

    // --- Signs ---
    #[token("+")]
    Plus,

    #[token("-")]
    Minus,

    // --- Delimiters ---
    #[token(",")]
    Comma,

    #[token("[")]
    LBracket,

    #[token("]")]
    RBracket,

    // Stand-in for any character logos could not match
    Error,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Token::Number(n) => write!(f, "{}", n),
            Token::Identifier(name) => write!(f, "{}", name),
            Token::Plus => write!(f, "+"),
            Token::Minus => write!(f, "-"),
            Token::Comma => write!(f, ","),
            Token::LBracket => write!(f, "["),
            Token::RBracket => write!(f, "]"),
            Token::Error => write!(f, "<invalid>"),
        }
    }
}
