//! faxc-grammar — the LL(1) grammar engine (component H, §4.6).
//!
//! Merges the productions exposed by a set of [`production::GrammarRule`]
//! objects into one [`production::ProductionSet`], computes FIRST and
//! FOLLOW sets by fix-point iteration, and builds an LL(1) [`table::ParseTable`]
//! from them. `build_table` reports every FIRST/FIRST and FIRST/FOLLOW
//! conflict it finds rather than stopping at the first.
//!
//! FIRST/FOLLOW results are pure functions of the production set; the core
//! (`symbol`, `production`, `first`, `follow`, `table`) never reaches into
//! `faxc-lex` or `faxc-par` — this is reusable static grammar analysis, not
//! tied to Fax's concrete token set. [`fax_rules`] is the one exception: a
//! real rule set for this front-end's own `using`-path grammar, named after
//! actual `faxc_lex::Leaf` terminals.

pub mod error;
pub mod fax_rules;
pub mod first;
pub mod follow;
pub mod production;
pub mod symbol;
pub mod table;

pub use error::GrammarError;
pub use production::{GrammarRule, ProductionSet};
pub use symbol::Symbol;
pub use table::{build_table, ParseTable};
