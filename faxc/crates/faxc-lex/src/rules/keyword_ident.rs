//! §4.2.2 Keyword/Identifier: classify against a fixed keyword table,
//! falling back to `identifier`.

use std::sync::OnceLock;

use indexmap::IndexMap;

use crate::error::LexErr;
use crate::leaf::Leaf;
use crate::rules::LexRule;
use crate::state::LexState;
use crate::token::Token;
use crate::unicode::{is_ident_continue, is_ident_start};

/// Process-wide, read-only after first use. `IndexMap` preserves insertion
/// order purely for readability of debug dumps; lookup does not depend on it.
fn keyword_table() -> &'static IndexMap<&'static str, Leaf> {
    static TABLE: OnceLock<IndexMap<&'static str, Leaf>> = OnceLock::new();
    TABLE.get_or_init(|| {
        let mut m = IndexMap::new();
        // literal keywords
        m.insert("null", Leaf::LvNull);
        m.insert("true", Leaf::LvTrue);
        m.insert("false", Leaf::LvFalse);
        // declaration keywords
        m.insert("var", Leaf::KwVar);
        m.insert("const", Leaf::KwConst);
        m.insert("static", Leaf::KwStatic);
        m.insert("object", Leaf::KwObject);
        m.insert("extend", Leaf::KwExtend);
        m.insert("def", Leaf::KwDef);
        m.insert("alias", Leaf::KwAlias);
        // primitive type keywords
        m.insert("bool", Leaf::KwBool);
        m.insert("char", Leaf::KwChar);
        m.insert("int8", Leaf::KwInt8);
        m.insert("int16", Leaf::KwInt16);
        m.insert("int32", Leaf::KwInt32);
        m.insert("int64", Leaf::KwInt64);
        m.insert("uint8", Leaf::KwUint8);
        m.insert("uint16", Leaf::KwUint16);
        m.insert("uint32", Leaf::KwUint32);
        m.insert("uint64", Leaf::KwUint64);
        m.insert("single", Leaf::KwSingle);
        m.insert("double", Leaf::KwDouble);
        m.insert("string", Leaf::KwString);
        m.insert("void", Leaf::KwVoid);
        // module keywords
        m.insert("using", Leaf::KwUsing);
        m.insert("module", Leaf::KwModule);
        m.insert("extern", Leaf::KwExtern);
        // control flow keywords
        m.insert("if", Leaf::KwIf);
        m.insert("else", Leaf::KwElse);
        m.insert("for", Leaf::KwFor);
        m.insert("do", Leaf::KwDo);
        m.insert("while", Leaf::KwWhile);
        m.insert("match", Leaf::KwMatch);
        m.insert("next", Leaf::KwNext);
        m.insert("break", Leaf::KwBreak);
        m.insert("as", Leaf::KwAs);
        m.insert("is", Leaf::KwIs);
        m.insert("return", Leaf::KwReturn);
        m
    })
}

pub struct KeywordIdentRule;

impl LexRule for KeywordIdentRule {
    fn litmus(&self, remaining: &str) -> bool {
        remaining.chars().next().is_some_and(is_ident_start)
    }

    fn tokenize<'src>(&self, state: &mut LexState<'src>) -> Result<Token<'src>, LexErr> {
        state.start_token();
        state.read_char();
        while !state.end_of_source() && is_ident_continue(state.curr_char()) {
            state.read_char();
        }
        let lexeme = &state.source()[state.lexeme_start()..state.index()];
        let kind = keyword_table().get(lexeme).copied().unwrap_or(Leaf::Identifier);
        Ok(state.extract_token(kind))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_keyword() {
        let mut s = LexState::new("using std");
        let tok = KeywordIdentRule.tokenize(&mut s).unwrap();
        assert_eq!(tok.kind, Leaf::KwUsing);
        assert_eq!(tok.lexeme, "using");
    }

    #[test]
    fn unknown_lexeme_becomes_identifier() {
        let mut s = LexState::new("hello_world2 ");
        let tok = KeywordIdentRule.tokenize(&mut s).unwrap();
        assert_eq!(tok.kind, Leaf::Identifier);
        assert_eq!(tok.lexeme, "hello_world2");
    }

    #[test]
    fn primitive_keyword_classified() {
        let mut s = LexState::new("int32");
        let tok = KeywordIdentRule.tokenize(&mut s).unwrap();
        assert_eq!(tok.kind, Leaf::KwInt32);
        assert!(tok.kind.is_primitive_keyword());
    }

    #[test]
    fn litmus_rejects_leading_digit() {
        assert!(!KeywordIdentRule.litmus("1abc"));
        assert!(KeywordIdentRule.litmus("_abc"));
    }
}
