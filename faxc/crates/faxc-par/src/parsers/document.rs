//! §4.5.7 DocumentParser (supplemented): drives the top level,
//! `(Import | Module)*` until `eos`.

use faxc_lex::Leaf;

use crate::ast::Document;
use crate::error::SynErr;
use crate::parsers::{import, module};
use crate::state::ParseState;

pub fn parse<'src>(state: &mut ParseState<'src>) -> Result<Document<'src>, SynErr> {
    let mut document = Document::default();

    while state.current().kind != Leaf::Eos {
        match state.current().kind {
            Leaf::KwUsing => document.imports.push(import::parse(state)?),
            Leaf::KwModule => document.modules.push(module::parse(state)?),
            _ => return Err(SynErr::NotMySyntax),
        }
    }

    Ok(document)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_imports_before_modules() {
        let src = "using std; using std.io; module sample;";
        let mut state = ParseState::new(src, "t").unwrap();
        let document = parse(&mut state).unwrap();
        assert_eq!(document.imports.len(), 2);
        assert_eq!(document.modules.len(), 1);
    }

    #[test]
    fn parses_integration_shaped_document() {
        let src = r#"using std;
module sample.hello;
# Test Comment
var mystr: string = 0;
def entry(args: string): void {
    console.print("Hello, World!");
}
"#;
        let mut state = ParseState::new(src, "t").unwrap();
        let document = parse(&mut state).unwrap();
        assert_eq!(document.imports.len(), 1);
        assert_eq!(document.modules.len(), 1);
        let module = &document.modules[0];
        assert_eq!(module.path.as_ref().unwrap().segments, vec!["sample", "hello"]);
        assert_eq!(module.variables.len(), 1);
        assert_eq!(module.functions.len(), 1);
    }

    #[test]
    fn unexpected_leading_token_is_hard_error() {
        let mut state = ParseState::new("123;", "t").unwrap();
        assert_eq!(parse(&mut state), Err(SynErr::NotMySyntax));
    }
}
