//! FIRST-set computation (§4.6): fix-point iteration over a [`ProductionSet`].
//!
//! ```text
//! FIRST(ε) = {ε}
//! FIRST(x·β') = { x }                       if x is terminal
//! FIRST(N·β') = (FIRST(N) \ {ε}) ∪
//!               ( FIRST(β') if ε ∈ FIRST(N) else ∅ )
//! ```

use faxc_util::{FxHashMap, FxHashSet};

use crate::production::ProductionSet;
use crate::symbol::Symbol;

pub type FirstSets = FxHashMap<String, FxHashSet<Symbol>>;

/// FIRST of a body (or any symbol sequence), given already-computed
/// non-terminal FIRST sets. Used both by [`compute`] itself and by
/// [`crate::follow::compute`]/[`crate::table::build_table`] to evaluate
/// `FIRST(β)` for an arbitrary suffix `β`.
pub fn first_of_sequence(body: &[Symbol], first: &FirstSets) -> FxHashSet<Symbol> {
    let mut result = FxHashSet::default();
    if body.is_empty() {
        result.insert(Symbol::Epsilon);
        return result;
    }

    let mut sequence_nullable = true;
    for symbol in body {
        match symbol {
            Symbol::Epsilon => {
                result.insert(Symbol::Epsilon);
                break;
            }
            Symbol::Terminal(_) => {
                result.insert(symbol.clone());
                sequence_nullable = false;
                break;
            }
            Symbol::NonTerminal(name) => {
                let n_first = first.get(name).cloned().unwrap_or_default();
                let nullable = n_first.contains(&Symbol::Epsilon);
                result.extend(n_first.into_iter().filter(|s| !s.is_epsilon()));
                if !nullable {
                    sequence_nullable = false;
                    break;
                }
            }
        }
    }
    if sequence_nullable {
        result.insert(Symbol::Epsilon);
    }
    result
}

/// Computes FIRST for every head in `productions`, iterating heads in
/// reverse sorted order each pass (§4.6's empirical convergence aid;
/// correctness does not depend on the order) until no set grows.
pub fn compute(productions: &ProductionSet) -> FirstSets {
    let mut first: FirstSets =
        productions.heads().map(|h| (h.clone(), FxHashSet::default())).collect();

    loop {
        let mut changed = false;
        for head in productions.heads().rev() {
            for body in productions.bodies_for(head) {
                let body_first = first_of_sequence(body, &first);
                let entry = first.get_mut(head).expect("head was seeded above");
                for item in body_first {
                    changed |= entry.insert(item);
                }
            }
        }
        if !changed {
            break;
        }
    }

    first
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::production::GrammarRule;
    use std::collections::HashSet;

    /// The classical expression grammar used throughout §4.6/§8:
    /// `E→T EP; EP→+T EP|ε; T→F TP; TP→*F TP|ε; F→(E)|id`.
    struct ExpressionGrammar;

    impl GrammarRule for ExpressionGrammar {
        fn productions(&self) -> Vec<(String, Vec<Symbol>)> {
            vec![
                ("E".into(), vec![Symbol::non_terminal("T"), Symbol::non_terminal("EP")]),
                ("EP".into(), vec![Symbol::terminal("+"), Symbol::non_terminal("T"), Symbol::non_terminal("EP")]),
                ("EP".into(), vec![Symbol::Epsilon]),
                ("T".into(), vec![Symbol::non_terminal("F"), Symbol::non_terminal("TP")]),
                ("TP".into(), vec![Symbol::terminal("*"), Symbol::non_terminal("F"), Symbol::non_terminal("TP")]),
                ("TP".into(), vec![Symbol::Epsilon]),
                ("F".into(), vec![Symbol::terminal("("), Symbol::non_terminal("E"), Symbol::terminal(")")]),
                ("F".into(), vec![Symbol::terminal("id")]),
            ]
        }
    }

    fn terminals(set: &FxHashSet<Symbol>) -> HashSet<&str> {
        set.iter()
            .filter_map(|s| match s {
                Symbol::Terminal(name) => Some(name.as_str()),
                Symbol::Epsilon => Some("ε"),
                Symbol::NonTerminal(_) => None,
            })
            .collect()
    }

    #[test]
    fn matches_classical_expression_grammar_first_sets() {
        let productions = ProductionSet::build("E", &[&ExpressionGrammar]);
        let first = compute(&productions);

        assert_eq!(terminals(&first["E"]), HashSet::from(["id", "("]));
        assert_eq!(terminals(&first["EP"]), HashSet::from(["ε", "+"]));
        assert_eq!(terminals(&first["T"]), HashSet::from(["id", "("]));
        assert_eq!(terminals(&first["TP"]), HashSet::from(["ε", "*"]));
        assert_eq!(terminals(&first["F"]), HashSet::from(["id", "("]));
    }

    #[test]
    fn first_of_empty_sequence_is_epsilon() {
        let first = FirstSets::default();
        assert_eq!(first_of_sequence(&[], &first), FxHashSet::from_iter([Symbol::Epsilon]));
    }

    #[test]
    fn first_of_sequence_stops_at_first_non_nullable_symbol() {
        let mut first = FirstSets::default();
        first.insert("A".to_string(), FxHashSet::from_iter([Symbol::Epsilon, Symbol::terminal("a")]));
        let body = vec![Symbol::non_terminal("A"), Symbol::terminal("b")];
        let result = first_of_sequence(&body, &first);
        assert_eq!(result, FxHashSet::from_iter([Symbol::terminal("a"), Symbol::terminal("b")]));
    }
}
