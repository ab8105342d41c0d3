//! Error taxonomy for the simulation core
//!
//! Construction rejects bodies that break the model's preconditions, and a
//! frame that hits a degenerate or non-finite state is aborted as a whole

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum SimError {
    #[error("invalid body `{name}`: {reason}")]
    InvalidBody { name: String, reason: String },

    #[error("invalid parameter `{field}`: {reason}")]
    InvalidParameters { field: &'static str, reason: String },

    #[error("a system needs exactly one anchor body, found {0}")]
    AnchorCount(usize),

    /// Two bodies share a position, the inverse-square force is undefined
    #[error("bodies `{a}` and `{b}` have zero separation")]
    DegenerateConfiguration { a: String, b: String },

    #[error("integration produced a non-finite state for `{name}`")]
    NonFiniteState { name: String },
}
