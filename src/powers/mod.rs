//! Executive powers granted by the Fascist track.

pub mod resolver;
pub mod table;

pub use resolver::{ExecutivePowerResolver, PowerOutcome};
pub use table::{power_for, ExecutivePower};
