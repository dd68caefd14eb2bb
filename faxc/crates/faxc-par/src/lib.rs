//! faxc-par — the recursive-descent parser (components E–I).
//!
//! Drives a [`faxc_lex::Lexer`] through a [`state::ParseState`] lookahead
//! buffer, one grammar rule per module under [`parsers`], into the tagged
//! [`ast`] node types. [`visitor::Visitor`] gives read-only traversal over a
//! built tree; [`pretty`] renders `Type`s back to canonical source form.
//!
//! A finished expression/statement grammar and a full function/object body
//! parser are out of scope here: `def`/`object`/`extend`/`var`/`const`/
//! `static` declarations are captured by [`parsers::module`] as unparsed
//! [`ast::ItemStub`] spans, not descended into.

pub mod ast;
pub mod error;
pub mod parsers;
pub mod pretty;
pub mod state;
pub mod visitor;

pub use error::SynErr;
pub use state::ParseState;
pub use visitor::Visitor;
