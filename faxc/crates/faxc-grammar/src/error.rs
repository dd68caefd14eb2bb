//! Grammar error taxonomy (§4.6, supplemented): the two canonical LL(1)
//! violations a [`crate::table::build_table`] pass can detect.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GrammarError {
    #[error("FIRST/FIRST conflict on `{head}`: alternatives share terminal `{terminal}`")]
    FirstFirstConflict { head: String, terminal: String },
    #[error("FIRST/FOLLOW conflict on `{head}`: an epsilon-derivable alternative's FOLLOW set overlaps another alternative's FIRST set on terminal `{terminal}`")]
    FirstFollowConflict { head: String, terminal: String },
}
