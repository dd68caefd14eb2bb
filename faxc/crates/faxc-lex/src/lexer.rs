//! Lexical analyzer (component D, §4.3): whitespace skip + ordered rule
//! dispatch. Produces one token per call to [`Lexer::tokenize`].

use crate::error::LexErr;
use crate::leaf::Leaf;
use crate::rules::{rule_chain, LexRule};
use crate::state::LexState;
use crate::token::Token;
use crate::unicode::is_space;

/// Single-pass, restartable dispatcher over the fixed rule order from §4.2.
pub struct Lexer<'src> {
    state: LexState<'src>,
}

impl<'src> Lexer<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            state: LexState::new(source),
        }
    }

    pub fn state(&self) -> &LexState<'src> {
        &self.state
    }

    /// Skips whitespace, then probes rules in order; the first whose
    /// `litmus` matches runs `tokenize`. An exhausted source yields `eos`;
    /// if every rule declines on non-exhausted input, returns
    /// [`LexErr::NotMyToken`].
    pub fn tokenize(&mut self) -> Result<Token<'src>, LexErr> {
        while !self.state.end_of_source() && is_space(self.state.curr_char()) {
            self.state.read_char();
        }

        for rule in rule_chain() {
            if rule.litmus(self.state.remaining_source()) {
                return rule.tokenize(&mut self.state);
            }
        }

        if self.state.end_of_source() {
            self.state.start_token();
            return Ok(self.state.extract_token(Leaf::Eos));
        }

        Err(LexErr::NotMyToken)
    }
}

/// Iterator-driven ergonomic (§4.3, §10) matching the teacher crate's
/// iterator-based lexer: yields one `Result` per [`Lexer::tokenize`] call,
/// stopping once `eos` is reached. A lex error does not end iteration —
/// every rule that fails still advances `state` past the offending input,
/// so the next `.next()` resumes tokenizing from there.
impl<'src> Iterator for Lexer<'src> {
    type Item = Result<Token<'src>, LexErr>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.tokenize() {
            Ok(tok) if tok.is_eos() => None,
            other => Some(other),
        }
    }
}
