//! §4.2.9 Operator/Delimiter: longest-match by greedy doubling/tripling and
//! trailing `=`. Unrecognized combinations emit `unknown`, never fail.

use crate::error::LexErr;
use crate::leaf::Leaf;
use crate::rules::LexRule;
use crate::state::LexState;
use crate::token::Token;

const PUNCTUATION: &[char] = &[
    '+', '-', '*', '/', '%', '=', '.', '?', '~', '&', '|', '^', '<', '>', '!', '(', ')', '{', '}',
    '[', ']', ',', ';', ':',
];

pub struct OperatorRule;

impl LexRule for OperatorRule {
    fn litmus(&self, remaining: &str) -> bool {
        remaining.chars().next().is_some_and(|c| PUNCTUATION.contains(&c))
    }

    fn tokenize<'src>(&self, state: &mut LexState<'src>) -> Result<Token<'src>, LexErr> {
        state.start_token();
        let lead = state.read_char();

        let kind = match lead {
            '+' => double_or_assign(state, '+', Leaf::OpInc, Leaf::OpAddAssign, Leaf::OpAdd),
            '-' => double_or_assign(state, '-', Leaf::OpDec, Leaf::OpSubAssign, Leaf::OpSub),
            '*' => assign_or(state, Leaf::OpMulAssign, Leaf::OpMul),
            '/' => assign_or(state, Leaf::OpDivAssign, Leaf::OpDiv),
            '%' => assign_or(state, Leaf::OpModAssign, Leaf::OpMod),
            '=' => assign_or(state, Leaf::OpEquals, Leaf::OpAssign),
            '~' => assign_or(state, Leaf::OpBitNotAssign, Leaf::OpBitNot),
            '^' => assign_or(state, Leaf::OpBitXorAssign, Leaf::OpBitXor),
            '!' => assign_or(state, Leaf::OpLogNotAssign, Leaf::OpLogNot),
            '&' => compound(
                state,
                '&',
                Leaf::OpLogAnd,
                Leaf::OpLogAndAssign,
                Leaf::OpBitAndAssign,
                Leaf::OpBitAnd,
            ),
            '|' => compound(
                state,
                '|',
                Leaf::OpLogOr,
                Leaf::OpLogOrAssign,
                Leaf::OpBitOrAssign,
                Leaf::OpBitOr,
            ),
            '<' => compound(
                state,
                '<',
                Leaf::OpBitLsh,
                Leaf::OpBitLshAssign,
                Leaf::OpLe,
                Leaf::OpLt,
            ),
            '>' => compound(
                state,
                '>',
                Leaf::OpBitRsh,
                Leaf::OpBitRshAssign,
                Leaf::OpGe,
                Leaf::OpGt,
            ),
            '.' => {
                if state.curr_char() == '.' {
                    state.read_char();
                    if state.curr_char() == '.' {
                        state.read_char();
                        Leaf::OpEllipsis
                    } else {
                        Leaf::OpCascade
                    }
                } else {
                    Leaf::OpAccess
                }
            }
            '?' => Leaf::OpTernary,
            '(' => Leaf::DcLparen,
            ')' => Leaf::DcRparen,
            '[' => Leaf::DcLbracket,
            ']' => Leaf::DcRbracket,
            '{' => Leaf::DcLbrace,
            '}' => Leaf::DcRbrace,
            ',' => Leaf::DcComma,
            ';' => Leaf::DcTerminator,
            ':' => Leaf::DcColon,
            _ => Leaf::Unknown,
        };

        Ok(state.extract_token(kind))
    }
}

/// `lead=` vs bare `lead`.
fn assign_or(state: &mut LexState, with_eq: Leaf, bare: Leaf) -> Leaf {
    if state.curr_char() == '=' {
        state.read_char();
        with_eq
    } else {
        bare
    }
}

/// `lead` doubled to `doubled`, optionally followed by `=`; otherwise
/// `lead=` or bare `lead`.
fn double_or_assign(state: &mut LexState, lead: char, doubled: Leaf, with_eq: Leaf, bare: Leaf) -> Leaf {
    if state.curr_char() == lead {
        state.read_char();
        doubled
    } else if state.curr_char() == '=' {
        state.read_char();
        with_eq
    } else {
        bare
    }
}

/// `lead` doubled (optionally `=`-suffixed), or `lead=`, or bare `lead`.
fn compound(
    state: &mut LexState,
    lead: char,
    doubled: Leaf,
    doubled_eq: Leaf,
    single_eq: Leaf,
    bare: Leaf,
) -> Leaf {
    if state.curr_char() == lead {
        state.read_char();
        if state.curr_char() == '=' {
            state.read_char();
            doubled_eq
        } else {
            doubled
        }
    } else if state.curr_char() == '=' {
        state.read_char();
        single_eq
    } else {
        bare
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lex(src: &str) -> Leaf {
        let mut s = LexState::new(src);
        OperatorRule.tokenize(&mut s).unwrap().kind
    }

    #[test]
    fn single_char_operators() {
        assert_eq!(lex("+1"), Leaf::OpAdd);
        assert_eq!(lex("?"), Leaf::OpTernary);
        assert_eq!(lex(";"), Leaf::DcTerminator);
    }

    #[test]
    fn doubled_operators() {
        assert_eq!(lex("++"), Leaf::OpInc);
        assert_eq!(lex("--"), Leaf::OpDec);
        assert_eq!(lex("&&"), Leaf::OpLogAnd);
        assert_eq!(lex("||"), Leaf::OpLogOr);
        assert_eq!(lex("<<"), Leaf::OpBitLsh);
        assert_eq!(lex(">>"), Leaf::OpBitRsh);
    }

    #[test]
    fn trailing_equals() {
        assert_eq!(lex("+="), Leaf::OpAddAssign);
        assert_eq!(lex("=="), Leaf::OpEquals);
        assert_eq!(lex("!="), Leaf::OpLogNotAssign);
        assert_eq!(lex("<="), Leaf::OpLe);
        assert_eq!(lex(">="), Leaf::OpGe);
        assert_eq!(lex("&="), Leaf::OpBitAndAssign);
        assert_eq!(lex("&&="), Leaf::OpLogAndAssign);
    }

    #[test]
    fn dot_family() {
        assert_eq!(lex(".x"), Leaf::OpAccess);
        assert_eq!(lex("..x"), Leaf::OpCascade);
        assert_eq!(lex("...x"), Leaf::OpEllipsis);
    }

    #[test]
    fn unrecognized_combination_is_unknown_not_an_error() {
        assert_eq!(lex("~x"), Leaf::OpBitNot);
        assert_eq!(lex("$"), Leaf::Unknown);
    }
}
