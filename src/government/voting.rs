//! Ballot collection and tally for a nominated government.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::tracker::Government;
use crate::core::{PlayerId, RulesViolation};

/// One player's vote.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ballot {
    pub voter: PlayerId,
    pub ja: bool,
    pub justification: Option<String>,
}

/// Result of a completed vote.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tally {
    pub ja: usize,
    pub nein: usize,
}

impl Tally {
    /// Strict majority of the ballots cast. Ties fail.
    #[must_use]
    pub fn passed(&self) -> bool {
        self.ja > self.nein
    }
}

/// Collects exactly one ballot per eligible voter.
///
/// Ballots stay private to the session until every voter has cast one.
#[derive(Clone, Debug)]
pub struct VotingSession {
    government: Government,
    voters: Vec<PlayerId>,
    ballots: FxHashMap<PlayerId, Ballot>,
}

impl VotingSession {
    /// Open a vote on `government` for the given voters (seat order).
    #[must_use]
    pub fn new(government: Government, voters: Vec<PlayerId>) -> Self {
        Self {
            government,
            voters,
            ballots: FxHashMap::default(),
        }
    }

    #[must_use]
    pub fn government(&self) -> Government {
        self.government
    }

    /// The next voter without a ballot, in seat order.
    #[must_use]
    pub fn next_voter(&self) -> Option<PlayerId> {
        self.voters
            .iter()
            .copied()
            .find(|v| !self.ballots.contains_key(v))
    }

    /// Record a ballot. Non-voters and repeat ballots are refused.
    pub fn cast(&mut self, ballot: Ballot) -> Result<(), RulesViolation> {
        if !self.voters.contains(&ballot.voter) || self.ballots.contains_key(&ballot.voter) {
            return Err(RulesViolation::InvalidBallot(ballot.voter));
        }
        self.ballots.insert(ballot.voter, ballot);
        Ok(())
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.ballots.len() == self.voters.len()
    }

    /// Count the vote. `None` until every ballot is in.
    #[must_use]
    pub fn tally(&self) -> Option<Tally> {
        if !self.is_complete() {
            return None;
        }
        let ja = self.ballots.values().filter(|b| b.ja).count();
        Some(Tally {
            ja,
            nein: self.ballots.len() - ja,
        })
    }

    /// Finish the vote: the tally plus every ballot in seat order.
    pub fn close(mut self) -> Result<(Tally, Vec<Ballot>), RulesViolation> {
        let tally = self.tally().ok_or(RulesViolation::VoteIncomplete {
            cast: self.ballots.len(),
            voters: self.voters.len(),
        })?;
        let ballots = self
            .voters
            .iter()
            .filter_map(|v| self.ballots.remove(v))
            .collect();
        Ok((tally, ballots))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(voters: usize) -> VotingSession {
        VotingSession::new(
            Government {
                president: PlayerId::new(0),
                chancellor: PlayerId::new(1),
            },
            PlayerId::all(voters).collect(),
        )
    }

    fn ballot(seat: u8, ja: bool) -> Ballot {
        Ballot {
            voter: PlayerId::new(seat),
            ja,
            justification: None,
        }
    }

    #[test]
    fn test_tally_requires_all_ballots() {
        let mut vote = session(5);
        for seat in 0..4 {
            vote.cast(ballot(seat, true)).unwrap();
            assert!(vote.tally().is_none());
        }
        assert_eq!(vote.next_voter(), Some(PlayerId::new(4)));
        vote.cast(ballot(4, false)).unwrap();
        assert_eq!(vote.tally(), Some(Tally { ja: 4, nein: 1 }));
    }

    #[test]
    fn test_tie_fails() {
        let mut vote = session(6);
        for seat in 0..6 {
            vote.cast(ballot(seat, seat % 2 == 0)).unwrap();
        }
        let tally = vote.tally().unwrap();
        assert_eq!(tally, Tally { ja: 3, nein: 3 });
        assert!(!tally.passed());
    }

    #[test]
    fn test_one_ballot_per_voter() {
        let mut vote = session(5);
        vote.cast(ballot(2, true)).unwrap();
        assert_eq!(
            vote.cast(ballot(2, false)),
            Err(RulesViolation::InvalidBallot(PlayerId::new(2)))
        );
        assert_eq!(
            vote.cast(ballot(7, true)),
            Err(RulesViolation::InvalidBallot(PlayerId::new(7)))
        );
        assert_eq!(vote.next_voter(), Some(PlayerId::new(0)));
    }

    #[test]
    fn test_close_refuses_partial_vote() {
        let mut vote = session(5);
        for seat in 0..3 {
            vote.cast(ballot(seat, true)).unwrap();
        }
        assert_eq!(
            vote.close().unwrap_err(),
            RulesViolation::VoteIncomplete { cast: 3, voters: 5 }
        );
    }

    #[test]
    fn test_close_counts_and_orders() {
        let mut vote = session(5);
        for (seat, ja) in [(4, true), (1, false), (0, true), (3, false), (2, false)] {
            vote.cast(ballot(seat, ja)).unwrap();
        }
        let (tally, ballots) = vote.close().unwrap();
        assert_eq!(tally, Tally { ja: 2, nein: 3 });
        assert!(!tally.passed());
        let order: Vec<_> = ballots.iter().map(|b| b.voter.seat()).collect();
        assert_eq!(order, vec![0, 1, 2, 3, 4]);
        assert!(ballots[4].ja);
    }
}
