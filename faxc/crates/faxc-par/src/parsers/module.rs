//! §4.5.7 ModuleParser (supplemented): `module SimplePath ;` followed by a
//! run of top-level declarations, partitioned by leading keyword into the
//! six `Module` sequences. Only `alias` is fully parsed; `extend`/`def`/
//! `object`/`var`/`const`/`static` bodies are skipped to the next `;` at
//! brace depth zero, or to the matching `}` once one is opened.

use faxc_lex::Leaf;

use crate::ast::{ItemStub, Module};
use crate::error::SynErr;
use crate::parsers::{alias, simple_path};
use crate::state::ParseState;

/// Start set: `module`.
pub fn parse<'src>(state: &mut ParseState<'src>) -> Result<Module<'src>, SynErr> {
    if state.current().kind != Leaf::KwModule {
        return Err(SynErr::NotMySyntax);
    }
    state.next_token()?;

    let path = simple_path::parse(state)?;

    if state.current().kind != Leaf::DcTerminator {
        return Err(SynErr::ExpectedTerminator);
    }
    state.next_token()?;

    let mut module = Module {
        path: Some(path),
        ..Module::default()
    };

    while !matches!(state.current().kind, Leaf::KwModule | Leaf::Eos) {
        match state.current().kind {
            Leaf::KwAlias => module.aliases.push(alias::parse(state)?),
            Leaf::KwExtend => module.extensions.push(parse_item_stub(state)?),
            Leaf::KwDef => module.functions.push(parse_item_stub(state)?),
            Leaf::KwObject => module.objects.push(parse_item_stub(state)?),
            Leaf::KwVar | Leaf::KwConst | Leaf::KwStatic => {
                module.variables.push(parse_item_stub(state)?)
            }
            // A brace-delimited body (e.g. `def f() { ... };`) can leave a
            // stray trailing `;` behind that starts no recognized item;
            // stop here rather than erroring and let the caller (document
            // level) decide what to do with the leftover token.
            _ => break,
        }
    }

    Ok(module)
}

/// Consumes one declaration keyword, an optional name, and its body (a
/// brace-delimited block or a bare `;`-terminated header), recording the raw
/// source span without descending into it.
fn parse_item_stub<'src>(state: &mut ParseState<'src>) -> Result<ItemStub<'src>, SynErr> {
    let source = state.source();
    let start = state.current().lexeme;
    state.next_token()?; // the declaration keyword

    let name = if state.current().kind == Leaf::Identifier {
        let n = state.current().lexeme;
        state.next_token()?;
        n
    } else {
        ""
    };

    let mut depth: i32 = 0;
    let mut entered_brace = false;
    let mut end = start;

    loop {
        match state.current().kind {
            Leaf::DcLbrace => {
                depth += 1;
                entered_brace = true;
                end = state.current().lexeme;
                state.next_token()?;
            }
            Leaf::DcRbrace => {
                depth -= 1;
                end = state.current().lexeme;
                state.next_token()?;
                if entered_brace && depth <= 0 {
                    break;
                }
            }
            Leaf::DcTerminator if !entered_brace => {
                end = state.current().lexeme;
                state.next_token()?;
                break;
            }
            Leaf::Eos => {
                state.report_warning(format!(
                    "declaration `{name}` reaches end of source with its body unterminated"
                ));
                break;
            }
            _ => {
                end = state.current().lexeme;
                state.next_token()?;
            }
        }
    }

    Ok(ItemStub {
        name,
        span: span_between(source, start, end),
    })
}

/// Slices `source[start..end]` using pointer offsets of two lexemes already
/// known to be views into it — avoids threading byte offsets through every
/// parser just to recover a skipped span.
fn span_between<'src>(source: &'src str, start: &'src str, end: &'src str) -> &'src str {
    let base = source.as_ptr() as usize;
    let start_off = start.as_ptr() as usize - base;
    let end_off = end.as_ptr() as usize - base + end.len();
    &source[start_off..end_off]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_module_header_with_no_items() {
        let mut state = ParseState::new("module sample.hello;", "t").unwrap();
        let module = parse(&mut state).unwrap();
        assert_eq!(module.path.unwrap().segments, vec!["sample", "hello"]);
        assert_eq!(state.current().kind, Leaf::Eos);
    }

    #[test]
    fn partitions_alias_and_skips_other_declarations() {
        let src = r#"module m;
alias Num = int32;
var mystr: string = 0;
def entry(args: string): void {
    return;
}
"#;
        let mut state = ParseState::new(src, "t").unwrap();
        let module = parse(&mut state).unwrap();
        assert_eq!(module.aliases.len(), 1);
        assert_eq!(module.aliases[0].name, "Num");
        assert_eq!(module.variables.len(), 1);
        assert_eq!(module.variables[0].name, "mystr");
        assert_eq!(module.functions.len(), 1);
        assert_eq!(module.functions[0].name, "entry");
        assert_eq!(state.current().kind, Leaf::Eos);
    }

    #[test]
    fn stops_at_next_module_statement() {
        let src = "module a; var x: int32; module b;";
        let mut state = ParseState::new(src, "t").unwrap();
        let first = parse(&mut state).unwrap();
        assert_eq!(first.variables.len(), 1);
        assert_eq!(state.current().kind, Leaf::KwModule);
    }

    #[test]
    fn brace_body_skips_internal_terminators() {
        let src = "module m; def f() { var x: int32; };";
        let mut state = ParseState::new(src, "t").unwrap();
        let module = parse(&mut state).unwrap();
        assert_eq!(module.functions.len(), 1);
        assert_eq!(state.current().kind, Leaf::DcTerminator);
    }

    #[test]
    fn unterminated_brace_body_reports_warning_instead_of_hard_error() {
        let src = "module m; def f() { var x: int32;";
        let mut state = ParseState::new(src, "t").unwrap();
        let module = parse(&mut state).unwrap();
        assert_eq!(module.functions.len(), 1);
        assert_eq!(state.diagnostics().len(), 1);
    }
}
