// Test module for parser
//
// Unit tests for the nested-list parser, the matrix conversion and the
// Ariadne error reports.
