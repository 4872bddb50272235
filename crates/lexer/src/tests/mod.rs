// Test module for lexer
//
// Unit tests for the matrix literal lexer, organized by category.
