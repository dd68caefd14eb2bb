//! Recursive-descent parsers (component G, §4.5), one module per grammar
//! rule, plus the supplemented alias/module/document skeleton parsers.

pub mod alias;
pub mod document;
pub mod import;
pub mod module;
pub mod path_expr;
pub mod segment;
pub mod simple_path;
pub mod type_parser;
