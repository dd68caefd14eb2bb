//! §4.5.4 TypeParser: a base path followed by an optional function,
//! array, or reference constructor.

use faxc_lex::Leaf;

use crate::ast::{ExprStub, Type, TypeKind};
use crate::error::SynErr;
use crate::parsers::path_expr;
use crate::state::ParseState;

/// Start set: same as [`path_expr::parse`].
pub fn parse<'src>(state: &mut ParseState<'src>) -> Result<Type<'src>, SynErr> {
    let base = path_expr::parse(state)?;

    let kind = match state.current().kind {
        Leaf::DcLparen => parse_fn_tail(state)?,
        Leaf::DcLbracket => parse_arr_tail(state)?,
        Leaf::OpMul | Leaf::OpBitAnd => parse_ref_tail(state)?,
        _ => TypeKind::Raw,
    };

    Ok(Type {
        segments: base.segments,
        kind,
    })
}

fn parse_fn_tail<'src>(state: &mut ParseState<'src>) -> Result<TypeKind<'src>, SynErr> {
    state.next_token()?; // '('
    let mut inputs = Vec::new();
    if state.current().kind != Leaf::DcRparen {
        loop {
            inputs.push(parse_committed(state)?);
            if state.current().kind == Leaf::DcComma {
                state.next_token()?;
                continue;
            }
            break;
        }
    }
    if state.current().kind != Leaf::DcRparen {
        return Err(SynErr::ExpectedClosingParen);
    }
    state.next_token()?; // ')'

    let output = if state.current().kind == Leaf::DcColon {
        state.next_token()?;
        Some(Box::new(parse_committed(state)?))
    } else {
        None
    };

    Ok(TypeKind::Fn { inputs, output })
}

/// Parses a `Type` where a type is mandatory at `current` because the
/// caller already committed past a `(`, `,`, or `:` — a child `NotMySyntax`
/// here means the type itself is missing, not that some alternative should
/// be tried, so it is remapped to `ExpectedType` instead of propagated raw.
fn parse_committed<'src>(state: &mut ParseState<'src>) -> Result<Type<'src>, SynErr> {
    parse(state).map_err(|e| match e {
        SynErr::NotMySyntax => SynErr::ExpectedType,
        other => other,
    })
}

fn parse_arr_tail<'src>(state: &mut ParseState<'src>) -> Result<TypeKind<'src>, SynErr> {
    state.next_token()?; // '['
    let mut dimensions = Vec::new();
    while state.current().kind != Leaf::DcRbracket {
        let span = state.current().lexeme;
        dimensions.push(ExprStub { span });
        state.next_token()?;
        if state.current().kind == Leaf::DcComma {
            state.next_token()?;
        }
        if state.current().kind == Leaf::Eos {
            return Err(SynErr::ExpectedClosingBracket);
        }
    }
    state.next_token()?; // ']'
    Ok(TypeKind::Arr { dimensions })
}

fn parse_ref_tail<'src>(state: &mut ParseState<'src>) -> Result<TypeKind<'src>, SynErr> {
    let mut depth = Vec::new();
    loop {
        match state.current().kind {
            Leaf::OpMul => {
                depth.push(true);
                state.next_token()?;
            }
            Leaf::OpBitAnd => {
                depth.push(false);
                state.next_token()?;
            }
            _ => break,
        }
    }
    Ok(TypeKind::Ref { depth })
}
