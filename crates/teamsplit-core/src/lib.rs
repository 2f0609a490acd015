//! Team partition core — uniform shuffle plus round-robin team assignment.
//!
//! Given a roster of unique names and a team count, produce a uniformly
//! random partition into near-equal-size teams. The pipeline is pure and
//! synchronous: each call copies its input, owns its output, and touches no
//! shared state, so concurrent callers need no coordination.
//!
//! # Components
//!
//! - **`shuffle`** — Copy-on-input Fisher–Yates with an injected RNG
//! - **`partition`** — Round-robin deal and the composed generator
//! - **`roster`** — roster.toml model and member-list validation
//! - **`error`** — The single partition failure mode

pub mod error;
pub mod partition;
pub mod roster;
pub mod shuffle;

pub use error::{PartitionError, PartitionResult};
pub use partition::{Partition, bucketize, generate, generate_partition};
pub use roster::{RosterError, RosterFile, validate_names};
pub use shuffle::shuffle;
