//! §4.5.5 ImportParser: `using SimplePath ;`.

use faxc_lex::Leaf;

use crate::ast::Import;
use crate::error::SynErr;
use crate::parsers::simple_path;
use crate::state::ParseState;

/// Start set: `using`.
pub fn parse<'src>(state: &mut ParseState<'src>) -> Result<Import<'src>, SynErr> {
    if state.current().kind != Leaf::KwUsing {
        return Err(SynErr::NotMySyntax);
    }
    state.next_token()?;

    let path = simple_path::parse(state).map_err(|e| match e {
        SynErr::NotMySyntax => SynErr::ExpectedIdentifier,
        other => other,
    })?;

    if state.current().kind != Leaf::DcTerminator {
        return Err(SynErr::ExpectedTerminator);
    }
    state.next_token()?;

    Ok(Import { path })
}
