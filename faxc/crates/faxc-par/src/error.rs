//! Syntax error taxonomy (§7, extensible).

use thiserror::Error;

use faxc_lex::LexErr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SynErr {
    #[error("unrecoverable syntax failure")]
    Unrecoverable,
    #[error("success")]
    Success,
    #[error("syntax failure")]
    Failure,
    #[error("this construct does not start here")]
    NotMySyntax,
    #[error("expected an identifier")]
    ExpectedIdentifier,
    #[error("expected `;`")]
    ExpectedTerminator,
    #[error("expected a type")]
    ExpectedType,
    #[error("expected `)`")]
    ExpectedClosingParen,
    #[error("expected `]`")]
    ExpectedClosingBracket,
    #[error("expected `>`")]
    ExpectedClosingAngle,
    #[error("expected `=`")]
    ExpectedAssign,
    #[error("lexical error while parsing: {0}")]
    Lex(LexErr),
}

impl From<LexErr> for SynErr {
    fn from(e: LexErr) -> Self {
        SynErr::Lex(e)
    }
}
