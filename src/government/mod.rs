//! Government formation: nomination, term limits, rotation, and elections.

pub mod tracker;
pub mod voting;

pub use tracker::{Government, GovernmentTracker, PRESIDENT_TERM_LIMIT_MIN_LIVING};
pub use voting::{Ballot, Tally, VotingSession};
