//! Pluggable lexical rules (component C, §4.2).
//!
//! Each rule is a capability pair: a cheap, non-advancing `litmus` predicate
//! over the remaining source, and a `tokenize` method invoked only after
//! `litmus` returned true. The dispatcher in [`crate::lexer`] probes rules in
//! the fixed order declared there.

mod binary;
mod character;
mod comment;
mod decimal;
mod hexadecimal;
mod keyword_ident;
mod octal;
mod operator;
mod string;

pub use binary::BinaryRule;
pub use character::CharacterRule;
pub use comment::CommentRule;
pub use decimal::DecimalRule;
pub use hexadecimal::HexadecimalRule;
pub use keyword_ident::KeywordIdentRule;
pub use octal::OctalRule;
pub use operator::OperatorRule;
pub use string::StringRule;

use crate::error::LexErr;
use crate::state::LexState;
use crate::token::Token;

pub trait LexRule {
    /// O(1) prefix check over the remaining source. Must not advance state.
    fn litmus(&self, remaining: &str) -> bool;

    /// Scans one token. Only ever called immediately after `litmus` returned
    /// true for the same remaining source.
    fn tokenize<'src>(&self, state: &mut LexState<'src>) -> Result<Token<'src>, LexErr>;
}

/// The fixed, greedy rule order from §4.2: comment, keyword/identifier,
/// binary, octal, decimal, hexadecimal, character, string,
/// operator/delimiter.
pub fn rule_chain() -> [&'static dyn LexRule; 9] {
    [
        &CommentRule,
        &KeywordIdentRule,
        &BinaryRule,
        &OctalRule,
        &DecimalRule,
        &HexadecimalRule,
        &CharacterRule,
        &StringRule,
        &OperatorRule,
    ]
}
