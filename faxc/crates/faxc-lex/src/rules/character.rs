//! §4.2.7 Character: `'c'`, `'\e'`, or `'\uXXXX'` (1-4 hex digits).

use crate::error::LexErr;
use crate::leaf::Leaf;
use crate::rules::LexRule;
use crate::state::LexState;
use crate::token::Token;

pub struct CharacterRule;

impl LexRule for CharacterRule {
    fn litmus(&self, remaining: &str) -> bool {
        remaining.starts_with('\'')
    }

    fn tokenize<'src>(&self, state: &mut LexState<'src>) -> Result<Token<'src>, LexErr> {
        state.start_token();
        state.read_char(); // opening '\''

        if state.curr_char() == '\\' {
            state.read_char(); // '\\'

            if state.curr_char() == 'u' {
                state.read_char(); // 'u'
                let mut hex_digits = 0;
                while hex_digits < 4 && state.curr_char().is_ascii_hexdigit() {
                    state.read_char();
                    hex_digits += 1;
                }
                if state.curr_char() != '\'' {
                    return Err(LexErr::InvalidUnicode);
                }
                state.read_char(); // closing '\''
            } else if state.curr_char() == '\'' {
                return Err(LexErr::InvalidCharacter);
            } else {
                if state.end_of_source() {
                    return Err(LexErr::InvalidCharacter);
                }
                state.read_char(); // escaped unit
                if state.curr_char() != '\'' {
                    return Err(LexErr::InvalidCharacter);
                }
                state.read_char();
            }
        } else {
            if state.end_of_source() {
                return Err(LexErr::InvalidCharacter);
            }
            state.read_char(); // the one code unit
            if state.curr_char() != '\'' {
                return Err(LexErr::InvalidCharacter);
            }
            state.read_char();
        }

        Ok(state.extract_token(Leaf::LvCharacter))
    }
}
