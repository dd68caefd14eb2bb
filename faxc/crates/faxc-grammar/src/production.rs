//! Production sets (§4.6): merges the productions exposed by a set of rule
//! objects into one `head → bodies` multi-map, keyed in sorted order so
//! FIRST/FOLLOW's reverse-iteration pass is deterministic across runs.

use std::collections::BTreeMap;

use crate::symbol::Symbol;

/// One grammar rule's contribution to a [`ProductionSet`]: a `head → body`
/// map, multiple bodies per head permitted (one call per alternative).
pub trait GrammarRule {
    fn productions(&self) -> Vec<(String, Vec<Symbol>)>;
}

/// The merged productions of every rule passed to [`ProductionSet::build`],
/// plus the distinguished start symbol FOLLOW seeds `{$}` on.
#[derive(Debug, Clone)]
pub struct ProductionSet {
    pub start: String,
    bodies: BTreeMap<String, Vec<Vec<Symbol>>>,
}

impl ProductionSet {
    pub fn build(start: impl Into<String>, rules: &[&dyn GrammarRule]) -> Self {
        let mut bodies: BTreeMap<String, Vec<Vec<Symbol>>> = BTreeMap::new();
        for rule in rules {
            for (head, body) in rule.productions() {
                bodies.entry(head).or_default().push(body);
            }
        }
        Self { start: start.into(), bodies }
    }

    /// Heads in sorted order. Combined with `.rev()` this gives the
    /// reverse-order pass §4.6 recommends for FIRST-set convergence.
    pub fn heads(&self) -> impl DoubleEndedIterator<Item = &String> {
        self.bodies.keys()
    }

    pub fn bodies_for(&self, head: &str) -> &[Vec<Symbol>] {
        self.bodies.get(head).map(Vec::as_slice).unwrap_or(&[])
    }
}
