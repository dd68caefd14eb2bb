//! Character classification helpers.
//!
//! Per §6, only ASCII letters, digits, and `_` form identifiers by default;
//! non-ASCII bytes are treated as opaque code units and never extend an
//! identifier. Whitespace skipping, by contrast, accepts any codepoint for
//! which Unicode considers `is space` true.

/// Whether `c` begins an identifier: ASCII alphabetic or `_`.
pub fn is_ident_start(c: char) -> bool {
    c == '_' || c.is_ascii_alphabetic()
}

/// Whether `c` continues an identifier: ASCII alphanumeric or `_`.
pub fn is_ident_continue(c: char) -> bool {
    c == '_' || c.is_ascii_alphanumeric()
}

/// Whether `c` is skippable inter-token whitespace.
pub fn is_space(c: char) -> bool {
    c.is_whitespace()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_only_identifier_classification() {
        assert!(is_ident_start('_'));
        assert!(is_ident_start('a'));
        assert!(!is_ident_start('1'));
        assert!(!is_ident_start('\u{3b1}')); // greek alpha: not ASCII

        assert!(is_ident_continue('9'));
        assert!(!is_ident_continue('-'));
    }

    #[test]
    fn whitespace_covers_unicode_space_separators() {
        assert!(is_space(' '));
        assert!(is_space('\t'));
        assert!(is_space('\n'));
        assert!(is_space('\u{2003}')); // em space
        assert!(!is_space('a'));
    }
}
