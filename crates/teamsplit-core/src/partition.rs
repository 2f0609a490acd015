//! Partition engine — random team assignment.
//!
//! Two-step pipeline:
//! 1. Shuffle the roster (uniform Fisher–Yates, see `shuffle`)
//! 2. Deal the shuffled roster round-robin into `team_count` teams
//!
//! All randomness lives in step 1; the round-robin deal is deterministic
//! given its input, which is what bounds team sizes to within one of each
//! other.

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{PartitionError, PartitionResult};
use crate::shuffle::shuffle;

/// The result of dividing a roster into teams.
///
/// The concatenation of `teams` (in team order, within-team order) is a
/// permutation of the roster it was built from. A partition is a pure value:
/// it has no identity and is produced fresh on every request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Partition<T> {
    pub teams: Vec<Vec<T>>,
}

impl<T> Partition<T> {
    /// Number of teams in the partition.
    pub fn team_count(&self) -> usize {
        self.teams.len()
    }

    /// Total members across all teams.
    pub fn total_members(&self) -> usize {
        self.teams.iter().map(Vec::len).sum()
    }

    /// Per-team sizes, in team order.
    pub fn team_sizes(&self) -> Vec<usize> {
        self.teams.iter().map(Vec::len).collect()
    }

    /// True if no two teams differ in size by more than one.
    pub fn is_balanced(&self) -> bool {
        let max = self.teams.iter().map(Vec::len).max().unwrap_or(0);
        let min = self.teams.iter().map(Vec::len).min().unwrap_or(0);
        max - min <= 1
    }
}

/// Deal `items` round-robin into `team_count` teams.
///
/// Element `idx` goes to team `idx % team_count`. That positional rule is the
/// only tie-break — members are never sorted or grouped by any attribute —
/// and it guarantees every team holds `floor(n/k)` or `ceil(n/k)` members.
///
/// Fails with [`PartitionError::InvalidRequest`] when `team_count` is zero or
/// exceeds `items.len()`; no partial result is produced.
pub fn bucketize<T>(items: Vec<T>, team_count: usize) -> PartitionResult<Partition<T>> {
    if team_count < 1 || team_count > items.len() {
        return Err(PartitionError::InvalidRequest {
            team_count,
            roster_size: items.len(),
        });
    }

    let mut teams: Vec<Vec<T>> = Vec::with_capacity(team_count);
    for _ in 0..team_count {
        teams.push(Vec::new());
    }

    for (idx, member) in items.into_iter().enumerate() {
        teams[idx % team_count].push(member);
    }

    Ok(Partition { teams })
}

/// Produce a random partition of `roster` into `team_count` teams.
///
/// Validates the request first (fail fast, before the shuffle), then composes
/// shuffle + round-robin deal. The input roster is never mutated. Concurrent
/// callers need no coordination: each call copies its input and owns its
/// result.
pub fn generate_partition<T: Clone, R: Rng>(
    roster: &[T],
    team_count: usize,
    rng: &mut R,
) -> PartitionResult<Partition<T>> {
    if team_count < 1 || team_count > roster.len() {
        return Err(PartitionError::InvalidRequest {
            team_count,
            roster_size: roster.len(),
        });
    }

    let shuffled = shuffle(roster, rng);
    let partition = bucketize(shuffled, team_count)?;

    debug!(
        roster_size = roster.len(),
        team_count,
        sizes = ?partition.team_sizes(),
        "generated partition"
    );

    Ok(partition)
}

/// [`generate_partition`] with the thread-local RNG.
pub fn generate<T: Clone>(roster: &[T], team_count: usize) -> PartitionResult<Partition<T>> {
    generate_partition(roster, team_count, &mut rand::thread_rng())
}
