//! §4.2.6 Hexadecimal: `0x[0-9a-fA-F]+`.

use crate::error::LexErr;
use crate::leaf::Leaf;
use crate::rules::LexRule;
use crate::state::LexState;
use crate::token::Token;

pub struct HexadecimalRule;

impl LexRule for HexadecimalRule {
    fn litmus(&self, remaining: &str) -> bool {
        remaining.starts_with("0x")
    }

    fn tokenize<'src>(&self, state: &mut LexState<'src>) -> Result<Token<'src>, LexErr> {
        state.start_token();
        state.read_char(); // '0'
        state.read_char(); // 'x'

        let mut has_digit = false;
        while state.curr_char().is_ascii_hexdigit() {
            state.read_char();
            has_digit = true;
        }

        if !has_digit {
            return Err(LexErr::InvalidHexadecimal);
        }
        Ok(state.extract_token(Leaf::LvSigned))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lexes_hex_literal() {
        let mut s = LexState::new("0xFF00;");
        let tok = HexadecimalRule.tokenize(&mut s).unwrap();
        assert_eq!(tok.kind, Leaf::LvSigned);
        assert_eq!(tok.lexeme, "0xFF00");
    }

    #[test]
    fn missing_body_is_invalid() {
        let mut s = LexState::new("0x;");
        assert_eq!(HexadecimalRule.tokenize(&mut s), Err(LexErr::InvalidHexadecimal));
    }
}
