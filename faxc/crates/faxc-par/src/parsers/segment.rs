//! §4.5.2 SegmentParser: a primitive keyword, or a generic identifier with
//! an optional `<…>` argument list.

use faxc_lex::Leaf;

use crate::ast::{Primitive, Segment};
use crate::error::SynErr;
use crate::parsers::type_parser;
use crate::state::ParseState;

fn primitive_for(kind: Leaf) -> Option<Primitive> {
    Some(match kind {
        Leaf::KwBool => Primitive::Bool,
        Leaf::KwChar => Primitive::Char,
        Leaf::KwInt8 => Primitive::Int8,
        Leaf::KwInt16 => Primitive::Int16,
        Leaf::KwInt32 => Primitive::Int32,
        Leaf::KwInt64 => Primitive::Int64,
        Leaf::KwUint8 => Primitive::Uint8,
        Leaf::KwUint16 => Primitive::Uint16,
        Leaf::KwUint32 => Primitive::Uint32,
        Leaf::KwUint64 => Primitive::Uint64,
        Leaf::KwSingle => Primitive::Single,
        Leaf::KwDouble => Primitive::Double,
        Leaf::KwString => Primitive::String,
        Leaf::KwVoid => Primitive::Void,
        _ => return None,
    })
}

/// Start set: `identifier` ∪ the primitive-keyword set.
pub fn parse<'src>(state: &mut ParseState<'src>) -> Result<Segment<'src>, SynErr> {
    if let Some(p) = primitive_for(state.current().kind) {
        state.next_token()?;
        return Ok(Segment::Primitive(p));
    }

    if state.current().kind != Leaf::Identifier {
        return Err(SynErr::NotMySyntax);
    }
    let name = state.current().lexeme;
    state.next_token()?;

    let mut inputs = Vec::new();
    if state.current().kind == Leaf::OpLt {
        state.next_token()?;
        if state.current().kind != Leaf::OpGt {
            loop {
                inputs.push(type_parser::parse(state)?);
                if state.current().kind == Leaf::DcComma {
                    state.next_token()?;
                    continue;
                }
                break;
            }
        }
        if state.current().kind != Leaf::OpGt {
            return Err(SynErr::ExpectedClosingAngle);
        }
        state.next_token()?;
    }

    Ok(Segment::Generic { name, inputs })
}
