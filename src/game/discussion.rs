//! Optional discussion rounds.
//!
//! After a nomination, a passed election, an enactment or a power use,
//! every living player in turn may speak or pass, starting with whoever
//! triggered the discussion. The whole table goes round `rounds` times.

use std::collections::VecDeque;

use crate::core::PlayerId;
use crate::government::Government;
use crate::history::EventId;
use crate::powers::ExecutivePower;

/// What the game does once the discussion is over.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resume {
    /// Open the vote on a nominated government.
    Vote(Government),
    /// Draw the elected government's hand.
    Legislate(Government),
    /// Grant the president an executive power.
    Power(ExecutivePower),
    /// Pass the presidency on.
    EndRound,
}

#[derive(Clone, Debug)]
pub struct Discussion {
    speakers: VecDeque<PlayerId>,
    opened_by: EventId,
    resume: Resume,
}

impl Discussion {
    /// `order` is the living table starting at the initiator.
    #[must_use]
    pub fn new(order: &[PlayerId], rounds: u32, opened_by: EventId, resume: Resume) -> Self {
        let speakers = (0..rounds).flat_map(|_| order.iter().copied()).collect();
        Self {
            speakers,
            opened_by,
            resume,
        }
    }

    #[must_use]
    pub fn next_speaker(&self) -> Option<PlayerId> {
        self.speakers.front().copied()
    }

    /// The current speaker has spoken or passed.
    pub fn advance(&mut self) {
        self.speakers.pop_front();
    }

    /// Event that opened the discussion.
    #[must_use]
    pub fn opened_by(&self) -> EventId {
        self.opened_by
    }

    #[must_use]
    pub fn resume(&self) -> Resume {
        self.resume
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rounds_repeat_the_order() {
        let order = [PlayerId::new(2), PlayerId::new(3), PlayerId::new(0)];
        let mut talk = Discussion::new(&order, 2, EventId(4), Resume::EndRound);

        let mut heard = Vec::new();
        while let Some(speaker) = talk.next_speaker() {
            heard.push(speaker.seat());
            talk.advance();
        }
        assert_eq!(heard, vec![2, 3, 0, 2, 3, 0]);
        assert_eq!(talk.opened_by(), EventId(4));
        assert_eq!(talk.resume(), Resume::EndRound);
    }

    #[test]
    fn test_zero_rounds_is_empty() {
        let talk = Discussion::new(&[PlayerId::new(0)], 0, EventId(0), Resume::EndRound);
        assert_eq!(talk.next_speaker(), None);
    }
}
