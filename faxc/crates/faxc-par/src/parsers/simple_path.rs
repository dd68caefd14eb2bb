//! §4.5.1 SimplePathParser: `IDENT ('.' IDENT)*`.

use faxc_lex::Leaf;

use crate::ast::SimplePath;
use crate::error::SynErr;
use crate::state::ParseState;

/// Start set: `identifier`. Returns `not_my_syntax` without consuming
/// anything if `current` is not an identifier.
pub fn parse<'src>(state: &mut ParseState<'src>) -> Result<SimplePath<'src>, SynErr> {
    if state.current().kind != Leaf::Identifier {
        return Err(SynErr::NotMySyntax);
    }

    let mut segments = vec![state.current().lexeme];
    state.next_token()?;

    while state.current().kind == Leaf::OpAccess {
        state.next_token()?;
        if state.current().kind != Leaf::Identifier {
            return Err(SynErr::ExpectedIdentifier);
        }
        segments.push(state.current().lexeme);
        state.next_token()?;
    }

    Ok(SimplePath::new(segments))
}
