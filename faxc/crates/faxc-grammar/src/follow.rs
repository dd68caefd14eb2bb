//! FOLLOW-set computation (§4.6): fix-point iteration seeded with
//! `FOLLOW(start) = {$}`.
//!
//! ```text
//! FOLLOW(N) ⊇ FIRST(β) \ {ε}
//! if ε ∈ FIRST(β):  FOLLOW(N) ⊇ FOLLOW(H)
//! ```
//! for every production `H → α·N·β`.

use faxc_util::{FxHashMap, FxHashSet};

use crate::first::{first_of_sequence, FirstSets};
use crate::production::ProductionSet;
use crate::symbol::Symbol;

pub type FollowSets = FxHashMap<String, FxHashSet<Symbol>>;

pub fn compute(productions: &ProductionSet, first: &FirstSets) -> FollowSets {
    let mut follow: FollowSets =
        productions.heads().map(|h| (h.clone(), FxHashSet::default())).collect();
    follow.entry(productions.start.clone()).or_default().insert(Symbol::end_of_input());

    loop {
        let mut changed = false;
        for head in productions.heads() {
            let head_follow_snapshot = follow.get(head).cloned().unwrap_or_default();
            for body in productions.bodies_for(head) {
                for (index, symbol) in body.iter().enumerate() {
                    let Symbol::NonTerminal(name) = symbol else { continue };
                    let beta = &body[index + 1..];
                    let beta_first = first_of_sequence(beta, first);

                    let entry = follow.entry(name.clone()).or_default();
                    for item in beta_first.iter().filter(|s| !s.is_epsilon()) {
                        changed |= entry.insert(item.clone());
                    }
                    if beta_first.contains(&Symbol::Epsilon) {
                        for item in &head_follow_snapshot {
                            changed |= entry.insert(item.clone());
                        }
                    }
                }
            }
        }
        if !changed {
            break;
        }
    }

    follow
}
