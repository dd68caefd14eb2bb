//! §4.2.3 Binary: `0b[01]+`.

use crate::error::LexErr;
use crate::leaf::Leaf;
use crate::rules::LexRule;
use crate::state::LexState;
use crate::token::Token;

pub struct BinaryRule;

impl LexRule for BinaryRule {
    fn litmus(&self, remaining: &str) -> bool {
        remaining.starts_with("0b")
    }

    fn tokenize<'src>(&self, state: &mut LexState<'src>) -> Result<Token<'src>, LexErr> {
        state.start_token();
        state.read_char(); // '0'
        state.read_char(); // 'b'

        let mut has_digit = false;
        while matches!(state.curr_char(), '0' | '1') {
            state.read_char();
            has_digit = true;
        }

        if !has_digit {
            return Err(LexErr::InvalidBinary);
        }
        Ok(state.extract_token(Leaf::LvSigned))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lexes_binary_literal() {
        let mut s = LexState::new("0b1010;");
        let tok = BinaryRule.tokenize(&mut s).unwrap();
        assert_eq!(tok.kind, Leaf::LvSigned);
        assert_eq!(tok.lexeme, "0b1010");
    }

    #[test]
    fn missing_body_is_invalid() {
        let mut s = LexState::new("0b;");
        assert_eq!(BinaryRule.tokenize(&mut s), Err(LexErr::InvalidBinary));
    }
}
