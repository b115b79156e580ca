//! Parser infrastructure for UVSS.
//!
//! # Architecture
//!
//! The lexer hands over tokens that already own their trivia, and the parser assembles
//! them into a green tree through [`GreenNodeBuilder`](crate::syntax::GreenNodeBuilder).
//! Tokens are pulled lazily with a small lookahead buffer.
//!
//! # Recovery Strategy
//!
//! The parser is resilient: it always produces a tree covering the whole input.
//!
//! 1. An expected token that is absent is inserted as a zero-width missing token and
//!    reported with `MissingToken`; nothing is consumed
//! 2. A token that cannot start or continue the current production is wrapped in an
//!    `Error` node, reported with `UnexpectedToken` and consumed
//! 3. Recovery sets define "synchronization points" per production
//!
//! Diagnostics live on the tree elements they concern, never in a side list.

pub mod lexer;

mod core;
mod grammar;
mod invariants;

#[cfg(test)]
mod tests;

pub use core::Parser;
pub use lexer::{Lexer, RawLexer, RawToken, lex};

use crate::syntax::GreenNode;

/// Parses `source` into a green `Document` node. Never fails.
pub fn parse_green(source: &str) -> GreenNode {
    let mut parser = Parser::new(source);
    parser.parse_document();
    parser.finish()
}
