//! LL(1) parse table construction (§4.6, supplemented conflict reporting).
//!
//! One entry per `(head, lookahead terminal)` pair, selecting the production
//! body the parser commits to on seeing that terminal. A conflict arises
//! when two alternatives of the same head would both claim the same
//! lookahead terminal; `build_table` collects every such conflict instead of
//! stopping at the first one, so a caller can report all of them at once.

use faxc_util::FxHashMap;

use crate::error::GrammarError;
use crate::first::{self, first_of_sequence, FirstSets};
use crate::follow::{self, FollowSets};
use crate::production::ProductionSet;
use crate::symbol::Symbol;

#[derive(Debug, Clone)]
pub struct ParseTable {
    entries: FxHashMap<(String, Symbol), Vec<Symbol>>,
    pub first: FirstSets,
    pub follow: FollowSets,
}

impl ParseTable {
    pub fn production_for(&self, head: &str, lookahead: &Symbol) -> Option<&[Symbol]> {
        self.entries.get(&(head.to_string(), lookahead.clone())).map(Vec::as_slice)
    }
}

/// Builds FIRST, FOLLOW, and the LL(1) table in one pass, collecting every
/// FIRST/FIRST and FIRST/FOLLOW conflict rather than failing on the first.
pub fn build_table(productions: &ProductionSet) -> Result<ParseTable, Vec<GrammarError>> {
    let first_sets = first::compute(productions);
    let follow_sets = follow::compute(productions, &first_sets);

    let mut entries: FxHashMap<(String, Symbol), Vec<Symbol>> = FxHashMap::default();
    let mut errors = Vec::new();

    for head in productions.heads() {
        for body in productions.bodies_for(head) {
            let body_first = first_of_sequence(body, &first_sets);

            for terminal in body_first.iter().filter(|s| !s.is_epsilon()) {
                insert_entry(&mut entries, &mut errors, head, terminal, body, false);
            }

            if body_first.contains(&Symbol::Epsilon) {
                for terminal in follow_sets.get(head).into_iter().flatten() {
                    insert_entry(&mut entries, &mut errors, head, terminal, body, true);
                }
            }
        }
    }

    if errors.is_empty() {
        Ok(ParseTable { entries, first: first_sets, follow: follow_sets })
    } else {
        Err(errors)
    }
}

fn insert_entry(
    entries: &mut FxHashMap<(String, Symbol), Vec<Symbol>>,
    errors: &mut Vec<GrammarError>,
    head: &str,
    terminal: &Symbol,
    body: &[Symbol],
    via_follow: bool,
) {
    let key = (head.to_string(), terminal.clone());
    match entries.get(&key) {
        Some(existing) if existing != body => {
            let terminal_name = match terminal {
                Symbol::Terminal(name) => name.clone(),
                other => format!("{other:?}"),
            };
            let error = if via_follow {
                GrammarError::FirstFollowConflict { head: head.to_string(), terminal: terminal_name }
            } else {
                GrammarError::FirstFirstConflict { head: head.to_string(), terminal: terminal_name }
            };
            errors.push(error);
        }
        Some(_) => {}
        None => {
            entries.insert(key, body.to_vec());
        }
    }
}
