//! §4.2.8 String: literal `"…"`, multiline `"""…"""`, raw multiline
//! `r"""…"""`, with interpolation (`{` not preceded by `\`) promoting the
//! emitted kind.

use crate::error::LexErr;
use crate::leaf::Leaf;
use crate::rules::LexRule;
use crate::state::LexState;
use crate::token::Token;

pub struct StringRule;

impl LexRule for StringRule {
    fn litmus(&self, remaining: &str) -> bool {
        remaining.starts_with('"') || remaining.starts_with("r\"\"\"")
    }

    fn tokenize<'src>(&self, state: &mut LexState<'src>) -> Result<Token<'src>, LexErr> {
        state.start_token();

        let raw = state.curr_char() == 'r';
        if raw {
            state.read_char(); // 'r'
        }
        state.read_char(); // first '"'

        let multiline = if raw {
            // litmus guarantees two more quotes follow.
            state.read_char();
            state.read_char();
            true
        } else if state.curr_char() == '"' && state.next_char() == '"' {
            state.read_char();
            state.read_char();
            true
        } else {
            false
        };

        let interpolated = if multiline {
            scan_multiline_body(state)?
        } else {
            scan_literal_body(state)?
        };

        let kind = match (raw, multiline, interpolated) {
            (true, _, true) => Leaf::LvIntString,
            (true, _, false) => Leaf::LvRawString,
            (false, true, true) => Leaf::LvMliString,
            (false, true, false) => Leaf::LvMlString,
            (false, false, true) => Leaf::LvIntString,
            (false, false, false) => Leaf::LvRawString,
        };
        Ok(state.extract_token(kind))
    }
}

/// Consumes `…"` (single-quoted body), returning whether it was interpolated.
fn scan_literal_body(state: &mut LexState) -> Result<bool, LexErr> {
    let mut interpolated = false;
    let mut prev = '\0';
    loop {
        if state.end_of_source() {
            return Err(LexErr::InvalidRawString);
        }
        let c = state.curr_char();
        if c == '\n' {
            return Err(LexErr::InvalidRawString);
        }
        if c == '"' {
            state.read_char();
            return Ok(interpolated);
        }
        if c == '{' && prev != '\\' {
            interpolated = true;
        }
        prev = state.read_char();
    }
}

/// Consumes `…"""` (triple-quoted body, newlines allowed), returning whether
/// it was interpolated.
fn scan_multiline_body(state: &mut LexState) -> Result<bool, LexErr> {
    let mut interpolated = false;
    let mut prev = '\0';
    loop {
        if state.end_of_source() {
            return Err(LexErr::InvalidMlString);
        }
        if state.peek(0) == '"' && state.peek(1) == '"' && state.peek(2) == '"' {
            state.read_char();
            state.read_char();
            state.read_char();
            return Ok(interpolated);
        }
        let c = state.curr_char();
        if c == '{' && prev != '\\' {
            interpolated = true;
        }
        prev = state.read_char();
    }
}
