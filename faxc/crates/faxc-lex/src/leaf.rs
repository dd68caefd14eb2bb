//! Terminal and non-terminal symbol kinds.
//!
//! [`Leaf`] is the closed set of token classes the lexer can produce.
//! [`Root`] is the (open-ended, but fixed here) set of grammar variables the
//! parser and grammar engine reason about. [`Symbol`] unifies the two behind
//! a single signed integer so grammar productions can mix terminals and
//! non-terminals in one body.

use std::fmt;

/// Every value below this is a [`Leaf`]; every value at or above it is a
/// [`Root`]. Kept well under `i16::MAX` so both kinds fit comfortably under
/// the 16-bit budget in the same signed range.
pub const LEAF_UPPER_LIMIT: i16 = 4096;

/// A terminal symbol kind: a class of token the lexer can produce.
///
/// Values are `< LEAF_UPPER_LIMIT`. `eos` is pinned to `-1` so it coincides
/// with the epsilon sentinel's numeric neighbor but is never confused with
/// it: epsilon only ever appears in a production body, `eos` only ever
/// labels a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(i16)]
pub enum Leaf {
    Eos = -1,
    Unknown = 0,
    Comment,
    Identifier,

    // literals
    LvSigned,
    /// Never produced by any rule in this lexer; reserved for a future `u`
    /// integer-suffix pass.
    LvUnsigned,
    LvDecimal,
    LvCharacter,
    LvRawString,
    LvIntString,
    LvMlString,
    LvMliString,
    LvNull,
    LvTrue,
    LvFalse,

    // keywords
    KwVar,
    KwConst,
    KwStatic,
    KwObject,
    KwExtend,
    KwDef,
    KwAlias,
    KwBool,
    KwChar,
    KwInt8,
    KwInt16,
    KwInt32,
    KwInt64,
    KwUint8,
    KwUint16,
    KwUint32,
    KwUint64,
    KwSingle,
    KwDouble,
    KwString,
    KwVoid,
    KwUsing,
    KwModule,
    KwExtern,

    // control flow
    KwIf,
    KwElse,
    KwFor,
    KwDo,
    KwWhile,
    KwMatch,
    KwNext,
    KwBreak,
    KwAs,
    KwIs,
    KwReturn,

    // operators
    OpAdd,
    OpSub,
    OpMul,
    OpDiv,
    OpMod,
    OpAddAssign,
    OpSubAssign,
    OpMulAssign,
    OpDivAssign,
    OpModAssign,
    OpInc,
    OpDec,
    OpAssign,
    OpEquals,
    OpAccess,
    OpTernary,
    OpCascade,
    OpEllipsis,
    OpBitAnd,
    OpBitOr,
    OpBitXor,
    OpBitNot,
    OpBitLsh,
    OpBitRsh,
    OpBitAndAssign,
    OpBitOrAssign,
    OpBitXorAssign,
    OpBitNotAssign,
    OpBitLshAssign,
    OpBitRshAssign,
    OpLogAnd,
    OpLogOr,
    OpLogNot,
    OpLogAndAssign,
    OpLogOrAssign,
    OpLogNotAssign,
    OpLt,
    OpGt,
    OpLe,
    OpGe,

    // delimiters
    DcLparen,
    DcRparen,
    DcLbracket,
    DcRbracket,
    DcLbrace,
    DcRbrace,
    DcComma,
    DcTerminator,
    DcColon,
}

impl Leaf {
    /// True for the primitive-type keywords `Segment::Primitive` can carry.
    pub fn is_primitive_keyword(self) -> bool {
        matches!(
            self,
            Leaf::KwBool
                | Leaf::KwChar
                | Leaf::KwInt8
                | Leaf::KwInt16
                | Leaf::KwInt32
                | Leaf::KwInt64
                | Leaf::KwUint8
                | Leaf::KwUint16
                | Leaf::KwUint32
                | Leaf::KwUint64
                | Leaf::KwSingle
                | Leaf::KwDouble
                | Leaf::KwString
                | Leaf::KwVoid
        )
    }
}

impl fmt::Display for Leaf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// A non-terminal symbol kind: a grammar variable produced by one or more
/// productions in the LL(1) grammar engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(i16)]
pub enum Root {
    Document = LEAF_UPPER_LIMIT,
    Docbody,
    Includes,
    Import,
    Module,
    Variable,
    Object,
    Objbody,
    Objcont,
    Idchain,
    Accchain,
    Vartype,
}

impl fmt::Display for Root {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// A unified view over [`Leaf`] and [`Root`] values, discriminated purely by
/// comparison against [`LEAF_UPPER_LIMIT`]. Cheap to copy, cheap to compare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Symbol(i16);

impl Symbol {
    /// The empty-production sentinel.
    pub const EPSILON: Symbol = Symbol(-1 - LEAF_UPPER_LIMIT_OFFSET);
    /// The end-of-input sentinel.
    pub const END: Symbol = Symbol(-2 - LEAF_UPPER_LIMIT_OFFSET);

    pub fn from_leaf(leaf: Leaf) -> Self {
        Symbol(leaf as i16)
    }

    pub fn from_root(root: Root) -> Self {
        Symbol(root as i16)
    }

    pub fn is_terminal(self) -> bool {
        self.0 < LEAF_UPPER_LIMIT && self != Self::EPSILON && self != Self::END
    }

    pub fn is_epsilon(self) -> bool {
        self == Self::EPSILON
    }

    pub fn is_end(self) -> bool {
        self == Self::END
    }

    pub fn raw(self) -> i16 {
        self.0
    }
}

/// Sentinels live just below the leaf range (offset past `eos = -1`) so they
/// never collide with a real `Leaf` discriminant.
const LEAF_UPPER_LIMIT_OFFSET: i16 = 100;

impl From<Leaf> for Symbol {
    fn from(leaf: Leaf) -> Self {
        Symbol::from_leaf(leaf)
    }
}

impl From<Root> for Symbol {
    fn from(root: Root) -> Self {
        Symbol::from_root(root)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leaf_and_root_ranges_never_overlap() {
        assert!((Leaf::Eos as i16) < LEAF_UPPER_LIMIT);
        assert!((Leaf::DcColon as i16) < LEAF_UPPER_LIMIT);
        assert!((Root::Document as i16) >= LEAF_UPPER_LIMIT);
    }

    #[test]
    fn symbol_discriminates_terminal_from_nonterminal() {
        let leaf_sym: Symbol = Leaf::Identifier.into();
        let root_sym: Symbol = Root::Module.into();
        assert!(leaf_sym.is_terminal());
        assert!(!root_sym.is_terminal());
    }

    #[test]
    fn sentinels_are_distinct_and_not_terminal() {
        assert!(Symbol::EPSILON.is_epsilon());
        assert!(Symbol::END.is_end());
        assert_ne!(Symbol::EPSILON, Symbol::END);
        assert!(!Symbol::EPSILON.is_terminal());
        assert!(!Symbol::END.is_terminal());
    }

    #[test]
    fn primitive_keyword_classification() {
        assert!(Leaf::KwInt32.is_primitive_keyword());
        assert!(Leaf::KwString.is_primitive_keyword());
        assert!(!Leaf::KwUsing.is_primitive_keyword());
        assert!(!Leaf::Identifier.is_primitive_keyword());
    }
}
