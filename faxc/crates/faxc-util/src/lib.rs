//! faxc-util - Shared infrastructure for the Fax compiler front-end.
//!
//! This crate carries the ambient stack the rest of the workspace builds on:
//! source spans ([`span`]), diagnostics ([`diagnostic`]), string interning
//! ([`symbol`]), and typed index vectors ([`index_vec`]). None of these are
//! specific to lexing or parsing; they are the plumbing `faxc-lex`,
//! `faxc-par`, and `faxc-grammar` all sit on top of.

pub mod diagnostic;
pub mod error;
pub mod index_vec;
pub mod span;
pub mod symbol;

pub use diagnostic::{Diagnostic, DiagnosticBuilder, Handler, Level};
pub use index_vec::{Idx, IndexVec};
pub use span::{FileId, Span};
pub use symbol::Symbol;

pub use rustc_hash::FxHashMap;
pub use rustc_hash::FxHashSet;
