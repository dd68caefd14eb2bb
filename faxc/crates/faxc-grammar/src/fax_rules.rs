//! A concrete [`GrammarRule`] for this front-end's own import/path grammar,
//! grounded directly in [`faxc_lex::Leaf`] terminals and named after
//! [`faxc_lex::Root`]'s non-terminal set (`Import`, `Idchain`).
//!
//! `faxc-par`'s `ImportParser`/`SimplePathParser` (§4.5.1, §4.5.5) are
//! hand-written recursive descent, not table-driven off this rule set — this
//! module exists so the engine has at least one real, non-illustrative
//! grammar to compute FIRST/FOLLOW over, not only the classical expression
//! grammar used for the §8 conformance scenario.

use faxc_lex::Leaf;

use crate::production::GrammarRule;
use crate::symbol::Symbol;

/// `Import -> using Idchain ;`
/// `Idchain -> identifier IdchainTail`
/// `IdchainTail -> . identifier IdchainTail | ε`
pub struct ImportGrammar;

impl GrammarRule for ImportGrammar {
    fn productions(&self) -> Vec<(String, Vec<Symbol>)> {
        vec![
            (
                "Import".into(),
                vec![
                    Symbol::from(Leaf::KwUsing),
                    Symbol::non_terminal("Idchain"),
                    Symbol::from(Leaf::DcTerminator),
                ],
            ),
            (
                "Idchain".into(),
                vec![Symbol::from(Leaf::Identifier), Symbol::non_terminal("IdchainTail")],
            ),
            (
                "IdchainTail".into(),
                vec![Symbol::from(Leaf::OpAccess), Symbol::from(Leaf::Identifier), Symbol::non_terminal("IdchainTail")],
            ),
            ("IdchainTail".into(), vec![Symbol::Epsilon]),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::production::ProductionSet;
    use crate::table::build_table;

    #[test]
    fn import_grammar_is_ll1() {
        let productions = ProductionSet::build("Import", &[&ImportGrammar]);
        build_table(&productions).expect("using-path grammar has no LL(1) conflicts");
    }

    #[test]
    fn idchain_tail_first_contains_access_and_epsilon() {
        let productions = ProductionSet::build("Import", &[&ImportGrammar]);
        let first = crate::first::compute(&productions);
        let tail_first = &first["IdchainTail"];
        assert!(tail_first.contains(&Symbol::from(Leaf::OpAccess)));
        assert!(tail_first.contains(&Symbol::Epsilon));
    }
}
