//! §4.2.5 Decimal: `[0-9]+('.'[0-9]+)?`.
//!
//! Litmus excludes the cases octal, binary, and hexadecimal already claim:
//! a leading `0` followed directly by another digit, `b`, or `x` is not
//! decimal's to take.

use crate::error::LexErr;
use crate::leaf::Leaf;
use crate::rules::LexRule;
use crate::state::LexState;
use crate::token::Token;

pub struct DecimalRule;

impl LexRule for DecimalRule {
    fn litmus(&self, remaining: &str) -> bool {
        let mut chars = remaining.chars();
        let Some(first) = chars.next() else {
            return false;
        };
        if !first.is_ascii_digit() {
            return false;
        }
        if first == '0' {
            if let Some(second) = chars.next() {
                if second == 'b' || second == 'x' || second.is_ascii_digit() {
                    return false;
                }
            }
        }
        true
    }

    fn tokenize<'src>(&self, state: &mut LexState<'src>) -> Result<Token<'src>, LexErr> {
        state.start_token();
        while state.curr_char().is_ascii_digit() {
            state.read_char();
        }

        if state.curr_char() == '.' && state.next_char().is_ascii_digit() {
            state.read_char(); // '.'
            while state.curr_char().is_ascii_digit() {
                state.read_char();
            }
            return Ok(state.extract_token(Leaf::LvDecimal));
        }

        Ok(state.extract_token(Leaf::LvSigned))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lexes_bare_zero_as_signed() {
        let mut s = LexState::new("0 ");
        let tok = DecimalRule.tokenize(&mut s).unwrap();
        assert_eq!(tok.kind, Leaf::LvSigned);
        assert_eq!(tok.lexeme, "0");
    }

    #[test]
    fn lexes_decimal_fraction() {
        let mut s = LexState::new("3.14;");
        let tok = DecimalRule.tokenize(&mut s).unwrap();
        assert_eq!(tok.kind, Leaf::LvDecimal);
        assert_eq!(tok.lexeme, "3.14");
    }

    #[test]
    fn trailing_dot_without_digit_is_left_untouched() {
        let mut s = LexState::new("3.;");
        let tok = DecimalRule.tokenize(&mut s).unwrap();
        assert_eq!(tok.kind, Leaf::LvSigned);
        assert_eq!(tok.lexeme, "3");
        assert_eq!(s.curr_char(), '.');
    }

    #[test]
    fn litmus_defers_to_other_bases() {
        assert!(!DecimalRule.litmus("0b1"));
        assert!(!DecimalRule.litmus("0x1"));
        assert!(!DecimalRule.litmus("0123"));
        assert!(DecimalRule.litmus("0"));
        assert!(DecimalRule.litmus("42"));
    }
}
