//! Shared test support and end-to-end tests.

pub(crate) mod lex;
