//! Pretty-printing (§6): canonical source-like rendering for `SimplePath`,
//! `Segment::{Primitive,Generic}`, `PathExpr`, and
//! `Type::{Raw,Fn,Arr,Ref}`. Re-lexing and re-parsing the output of
//! [`Type::pretty`] yields a structurally equal `Type` (§8).

use std::fmt::Write as _;

use crate::ast::{Primitive, Segment, SimplePath, Type, TypeKind};

impl Primitive {
    fn as_str(self) -> &'static str {
        match self {
            Primitive::Bool => "bool",
            Primitive::Char => "char",
            Primitive::Int8 => "int8",
            Primitive::Int16 => "int16",
            Primitive::Int32 => "int32",
            Primitive::Int64 => "int64",
            Primitive::Uint8 => "uint8",
            Primitive::Uint16 => "uint16",
            Primitive::Uint32 => "uint32",
            Primitive::Uint64 => "uint64",
            Primitive::Single => "single",
            Primitive::Double => "double",
            Primitive::String => "string",
            Primitive::Void => "void",
        }
    }
}

impl<'src> SimplePath<'src> {
    /// Dotted form: `a.b.c`.
    pub fn pretty(&self) -> String {
        self.segments.join(".")
    }
}

impl<'src> Segment<'src> {
    /// A bare name, or `name<in,in>` with an empty-but-present `<>` when the
    /// source wrote one.
    pub fn pretty(&self) -> String {
        match self {
            Segment::Primitive(p) => p.as_str().to_string(),
            Segment::Generic { name, inputs } => {
                if inputs.is_empty() {
                    name.to_string()
                } else {
                    let args: Vec<String> = inputs.iter().map(Type::pretty).collect();
                    format!("{name}<{}>", args.join(","))
                }
            }
        }
    }
}

fn pretty_segments(segments: &[Segment]) -> String {
    segments.iter().map(Segment::pretty).collect::<Vec<_>>().join(".")
}

impl<'src> Type<'src> {
    /// Canonical source-like rendering: dotted base, `(in,in):out` for
    /// function types, `base[]` for array types (one `[]` per dimension),
    /// and trailing `*`/`&` sigils in source order for reference types.
    pub fn pretty(&self) -> String {
        let base = pretty_segments(&self.segments);
        match &self.kind {
            TypeKind::Raw => base,
            TypeKind::Fn { inputs, output } => {
                let args: Vec<String> = inputs.iter().map(Type::pretty).collect();
                let mut out = format!("{base}({})", args.join(","));
                if let Some(output) = output {
                    let _ = write!(out, ":{}", output.pretty());
                }
                out
            }
            TypeKind::Arr { dimensions } => {
                let mut out = base;
                for _ in dimensions {
                    out.push_str("[]");
                }
                out
            }
            TypeKind::Ref { depth } => {
                let mut out = base;
                for is_pointer in depth {
                    out.push(if *is_pointer { '*' } else { '&' });
                }
                out
            }
        }
    }
}
