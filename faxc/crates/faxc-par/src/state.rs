//! Parse state (component F, §4.4): wraps a lexer and its lookahead token.
//!
//! `ParseState` borrows its source the same way [`faxc_lex::LexState`] does,
//! so the `current` token it holds and whatever a parser extracts from it
//! both live as long as the underlying buffer, independent of any single
//! `&mut` call into the state.
//!
//! Comment tokens are real [`faxc_lex::Leaf::Comment`] lexemes (the lexer
//! never discards them, §4.2.1), but no syntax rule's start set ever
//! mentions `comment` — they are trivia from the parser's point of view, so
//! `current` is never allowed to rest on one.

use faxc_lex::{Leaf, Lexer, Token};
use faxc_util::diagnostic::{Diagnostic, Handler};
use faxc_util::Span;

use crate::error::SynErr;

pub struct ParseState<'src> {
    lexer: Lexer<'src>,
    /// Identifies the source for diagnostics; not inspected by any parser.
    path: String,
    current: Token<'src>,
    /// Accumulates non-fatal diagnostics (e.g. a skipped malformed item
    /// body) without aborting the parse; hard failures still surface as
    /// `Err(SynErr)`.
    handler: Handler,
}

impl<'src> ParseState<'src> {
    /// Builds a state positioned on the first non-comment token of `source`.
    pub fn new(source: &'src str, path: impl Into<String>) -> Result<Self, SynErr> {
        let mut lexer = Lexer::new(source);
        let current = Self::next_significant(&mut lexer)?;
        Ok(Self {
            lexer,
            path: path.into(),
            current,
            handler: Handler::new(),
        })
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Diagnostics accumulated so far (e.g. item bodies skipped while
    /// unterminated at end of source). Never includes hard `SynErr`
    /// failures, which abort parsing instead.
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.handler.diagnostics()
    }

    /// Records a non-fatal diagnostic against `current`'s position.
    pub(crate) fn report_warning(&self, message: impl Into<String>) {
        self.handler.warning(message, Span::DUMMY);
    }

    /// The full source buffer this state was built from.
    pub fn source(&self) -> &'src str {
        self.lexer.state().source()
    }

    pub fn current(&self) -> Token<'src> {
        self.current
    }

    /// Pulls the next non-comment token from the lexer into `current`,
    /// returning it.
    pub fn next_token(&mut self) -> Result<Token<'src>, SynErr> {
        self.current = Self::next_significant(&mut self.lexer)?;
        Ok(self.current)
    }

    fn next_significant(lexer: &mut Lexer<'src>) -> Result<Token<'src>, SynErr> {
        loop {
            let tok = lexer.tokenize()?;
            if tok.kind != Leaf::Comment {
                return Ok(tok);
            }
        }
    }
}
