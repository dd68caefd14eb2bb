//! §4.5.3 PathExprParser: `Segment ('.' Segment)*`, minimum length 1.

use faxc_lex::Leaf;

use crate::ast::PathExpr;
use crate::error::SynErr;
use crate::parsers::segment;
use crate::state::ParseState;

/// Start set: same as [`segment::parse`]. Each `.` must be followed by a
/// parseable segment; otherwise a hard error.
pub fn parse<'src>(state: &mut ParseState<'src>) -> Result<PathExpr<'src>, SynErr> {
    let mut segments = vec![segment::parse(state)?];

    while state.current().kind == Leaf::OpAccess {
        state.next_token()?;
        segments.push(segment::parse(state).map_err(|e| match e {
            SynErr::NotMySyntax => SynErr::ExpectedIdentifier,
            other => other,
        })?);
    }

    Ok(PathExpr::new(segments))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{Primitive, Segment};

    #[test]
    fn parses_single_segment_path() {
        let mut state = ParseState::new("int32;", "t").unwrap();
        let expr = parse(&mut state).unwrap();
        assert_eq!(expr.segments, vec![Segment::Primitive(Primitive::Int32)]);
    }

    #[test]
    fn parses_dotted_segment_chain() {
        let mut state = ParseState::new("std.io.console;", "t").unwrap();
        let expr = parse(&mut state).unwrap();
        assert_eq!(expr.segments.len(), 3);
    }

    #[test]
    fn dot_without_following_segment_is_hard_error() {
        let mut state = ParseState::new("std.;", "t").unwrap();
        assert_eq!(parse(&mut state), Err(SynErr::ExpectedIdentifier));
    }

    #[test]
    fn non_matching_start_is_soft_failure() {
        let mut state = ParseState::new(";", "t").unwrap();
        assert_eq!(parse(&mut state), Err(SynErr::NotMySyntax));
    }
}
