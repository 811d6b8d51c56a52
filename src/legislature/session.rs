//! One round of legislation.
//!
//! The president draws three policies and discards one; the chancellor
//! receives the other two, discards one, and enacts the last. Which cards
//! were really seen and discarded is returned to the caller so it can be
//! recorded privately, independent of any public claim.

use serde::{Deserialize, Serialize};

use crate::core::{DecisionOption, RulesViolation};
use crate::deck::{Hand, Policy};
use crate::government::Government;

/// Cards the president draws.
pub const PRESIDENT_HAND: usize = 3;

/// Cards the chancellor receives.
pub const CHANCELLOR_HAND: usize = 2;

/// Who holds the hand.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Stage {
    President,
    Chancellor,
}

/// What the president saw and did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PresidentDiscard {
    pub seen: Hand,
    pub discarded: Policy,
    pub passed: Hand,
}

/// What the chancellor saw and did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChancellorDiscard {
    pub seen: Hand,
    pub discarded: Policy,
    pub enacted: Policy,
}

/// An open legislative session. Holds the cards currently in play.
#[derive(Clone, Debug)]
pub struct LegislativeSession {
    government: Government,
    stage: Stage,
    hand: Hand,
}

impl LegislativeSession {
    /// Start a session with the president's three drawn cards.
    pub fn open(government: Government, drawn: Hand) -> Result<Self, RulesViolation> {
        if drawn.len() != PRESIDENT_HAND {
            return Err(RulesViolation::HandMismatch {
                expected: PRESIDENT_HAND,
                actual: drawn.len(),
            });
        }
        Ok(Self {
            government,
            stage: Stage::President,
            hand: drawn,
        })
    }

    #[must_use]
    pub fn government(&self) -> Government {
        self.government
    }

    #[must_use]
    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// Cards currently held.
    #[must_use]
    pub fn hand(&self) -> &[Policy] {
        &self.hand
    }

    /// One discard option per held card, in hand order.
    #[must_use]
    pub fn discard_options(&self) -> Vec<DecisionOption> {
        self.hand.iter().map(|&p| DecisionOption::Policy(p)).collect()
    }

    /// President discards the card at `index` and passes the rest.
    pub fn president_discard(&mut self, index: usize) -> Result<PresidentDiscard, RulesViolation> {
        self.expect(Stage::President, PRESIDENT_HAND, index)?;

        let seen = self.hand.clone();
        let discarded = self.hand.remove(index);
        self.stage = Stage::Chancellor;

        Ok(PresidentDiscard {
            seen,
            discarded,
            passed: self.hand.clone(),
        })
    }

    /// Chancellor discards the card at `index` and enacts the other.
    ///
    /// Consumes the session: no cards remain in play afterwards.
    pub fn chancellor_discard(mut self, index: usize) -> Result<ChancellorDiscard, RulesViolation> {
        self.expect(Stage::Chancellor, CHANCELLOR_HAND, index)?;

        let seen = self.hand.clone();
        let discarded = self.hand.remove(index);
        let enacted = self.hand[0];

        Ok(ChancellorDiscard {
            seen,
            discarded,
            enacted,
        })
    }

    fn expect(&self, stage: Stage, size: usize, index: usize) -> Result<(), RulesViolation> {
        if self.stage != stage || self.hand.len() != size || index >= size {
            return Err(RulesViolation::HandMismatch {
                expected: size,
                actual: self.hand.len(),
            });
        }
        Ok(())
    }
}
