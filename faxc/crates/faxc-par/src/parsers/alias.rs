//! §4.5.6 AliasParser (supplemented): `alias IDENT = Type ;`.

use faxc_lex::Leaf;

use crate::ast::Alias;
use crate::error::SynErr;
use crate::parsers::type_parser;
use crate::state::ParseState;

/// Start set: `alias`.
pub fn parse<'src>(state: &mut ParseState<'src>) -> Result<Alias<'src>, SynErr> {
    if state.current().kind != Leaf::KwAlias {
        return Err(SynErr::NotMySyntax);
    }
    state.next_token()?;

    if state.current().kind != Leaf::Identifier {
        return Err(SynErr::ExpectedIdentifier);
    }
    let name = state.current().lexeme;
    state.next_token()?;

    if state.current().kind != Leaf::OpAssign {
        return Err(SynErr::ExpectedAssign);
    }
    state.next_token()?;

    let aliased = type_parser::parse(state)?;

    if state.current().kind != Leaf::DcTerminator {
        return Err(SynErr::ExpectedTerminator);
    }
    state.next_token()?;

    Ok(Alias { name, aliased })
}
