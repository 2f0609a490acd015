//! Partition error types.

use thiserror::Error;

/// Errors that can occur when requesting a partition.
///
/// There is exactly one failure mode: the requested team count does not fit
/// the roster. It is always caller-correctable and never transient, so no
/// retry or fallback path exists anywhere in the pipeline.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PartitionError {
    #[error("invalid partition request: {team_count} team(s) for a roster of {roster_size}")]
    InvalidRequest {
        /// The requested number of teams.
        team_count: usize,
        /// How many members the roster actually has.
        roster_size: usize,
    },
}

pub type PartitionResult<T> = Result<T, PartitionError>;
