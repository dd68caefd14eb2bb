//! §4.2.1 Comment: `# ... <newline-or-eos>`.

use crate::error::LexErr;
use crate::leaf::Leaf;
use crate::rules::LexRule;
use crate::state::LexState;
use crate::token::Token;

pub struct CommentRule;

impl LexRule for CommentRule {
    fn litmus(&self, remaining: &str) -> bool {
        remaining.starts_with('#')
    }

    fn tokenize<'src>(&self, state: &mut LexState<'src>) -> Result<Token<'src>, LexErr> {
        state.start_token();
        state.read_char(); // '#'
        while !state.end_of_source() && state.curr_char() != '\n' {
            state.read_char();
        }
        Ok(state.extract_token(Leaf::Comment))
    }
}
