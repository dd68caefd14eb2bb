//! §4.2.4 Octal: `0[0-7]+`.
//!
//! Litmus requires a *second* digit in `0..=7`, so a bare `"0"` never
//! satisfies it — decimal claims that case instead (§9 Open Question 1).

use crate::error::LexErr;
use crate::leaf::Leaf;
use crate::rules::LexRule;
use crate::state::LexState;
use crate::token::Token;

pub struct OctalRule;

impl LexRule for OctalRule {
    fn litmus(&self, remaining: &str) -> bool {
        let mut chars = remaining.chars();
        chars.next() == Some('0') && matches!(chars.next(), Some('0'..='7'))
    }

    fn tokenize<'src>(&self, state: &mut LexState<'src>) -> Result<Token<'src>, LexErr> {
        state.start_token();
        state.read_char(); // '0'
        while matches!(state.curr_char(), '0'..='7') {
            state.read_char();
        }
        Ok(state.extract_token(Leaf::LvSigned))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lexes_octal_literal() {
        let mut s = LexState::new("0123;");
        let tok = OctalRule.tokenize(&mut s).unwrap();
        assert_eq!(tok.kind, Leaf::LvSigned);
        assert_eq!(tok.lexeme, "0123");
    }

    #[test]
    fn litmus_rejects_bare_zero() {
        assert!(!OctalRule.litmus("0"));
        assert!(!OctalRule.litmus("0;"));
    }

    #[test]
    fn litmus_rejects_non_octal_second_digit() {
        assert!(!OctalRule.litmus("08"));
        assert!(OctalRule.litmus("07"));
    }
}
