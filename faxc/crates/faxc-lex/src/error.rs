//! Lexical error taxonomy (§7).
//!
//! Each scanning rule owns its own failure kind; the dispatcher turns "every
//! rule declined" into [`LexErr::NotMyToken`].

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LexErr {
    #[error("unrecoverable lexical failure")]
    Unrecoverable,
    #[error("success")]
    Success,
    #[error("lexical failure")]
    Failure,
    #[error("no rule claims this input")]
    NotMyToken,
    #[error("invalid binary literal: missing digits after `0b`")]
    InvalidBinary,
    #[error("invalid octal literal")]
    InvalidOctal,
    #[error("invalid hexadecimal literal: missing digits after `0x`")]
    InvalidHexadecimal,
    #[error("invalid unicode character escape")]
    InvalidUnicode,
    #[error("invalid character literal")]
    InvalidCharacter,
    #[error("unterminated string literal")]
    InvalidRawString,
    #[error("unterminated multiline string literal")]
    InvalidMlString,
}
