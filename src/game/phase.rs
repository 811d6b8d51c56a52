//! Phases of a round.

use serde::{Deserialize, Serialize};

/// Where the game currently stands.
///
/// A normal round runs `Nominating → Voting → PresidentDiscard →
/// ChancellorDiscard → PowerResolution → Nominating`, with `Discussion`
/// interleaved after nominations, passed elections, enactments and power
/// use. `GameOver` is terminal and reachable from any phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    Nominating,
    Voting,
    PresidentDiscard,
    ChancellorDiscard,
    PowerResolution,
    Discussion,
    GameOver,
}

impl Phase {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Phase::GameOver)
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Phase::Nominating => "nominating",
            Phase::Voting => "voting",
            Phase::PresidentDiscard => "president discard",
            Phase::ChancellorDiscard => "chancellor discard",
            Phase::PowerResolution => "power resolution",
            Phase::Discussion => "discussion",
            Phase::GameOver => "game over",
        };
        f.write_str(name)
    }
}
