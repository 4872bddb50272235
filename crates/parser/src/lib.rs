pub mod ast;
pub mod error;
pub mod matrix;
pub mod parser;

pub use matrix::parse_matrix;

#[cfg(test)]
mod tests;
