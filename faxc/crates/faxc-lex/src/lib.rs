//! faxc-lex — the lexical analyzer (components A–D).
//!
//! Tokenizes a UTF-8 source buffer into a stream of [`Token`] values. Nine
//! pluggable [`rules::LexRule`]s (comment, keyword/identifier, binary,
//! octal, decimal, hexadecimal, character, string, operator/delimiter) are
//! probed in a fixed order by the dispatching [`Lexer`]; each rule scans a
//! zero-copy lexeme view into the owning source.
//!
//! The single-pass `Lexer` never blocks and never panics: every failure
//! mode is an [`LexErr`] value (§7).

pub mod error;
pub mod leaf;
pub mod lexer;
pub mod rules;
pub mod state;
pub mod token;
pub mod unicode;

pub use error::LexErr;
pub use leaf::{Leaf, Root, Symbol, LEAF_UPPER_LIMIT};
pub use lexer::Lexer;
pub use state::LexState;
pub use token::Token;
