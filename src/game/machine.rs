//! The game state machine.
//!
//! `Game` owns every piece of state for one table and exposes a single
//! mutation, `apply`, answering the one outstanding `DecisionRequest`
//! returned by `pending`. A rejected decision leaves the game untouched and
//! the same request stays pending.
//!
//! ## Round flow
//!
//! ```text
//! Nominating ─► (Discussion) ─► Voting ─┬─ rejected ─► [chaos?] ─► next round
//!                                       └─ passed ─► (Discussion) ─► PresidentDiscard
//! PresidentDiscard ─► ChancellorDiscard ─► (Discussion) ─► [PowerResolution ─► (Discussion)]
//!                                                          ─► next round
//! ```
//!
//! Every applied decision appends exactly one event. Consequences the
//! engine resolves on its own (chaos enactment, policy peek, game end)
//! append their own events after it.

use smallvec::smallvec;
use tracing::{debug, error, info, warn};

use super::discussion::{Discussion, Resume};
use super::phase::Phase;
use crate::core::{
    ConfigError, DecisionError, DecisionKind, DecisionOption, DecisionRecord, DecisionRequest,
    DecisionResponse, GameConfig, GameError, GameRng, PlayerId, RulesViolation, Stream,
};
use crate::deck::{full_deck, Policy, PolicyDeck, Tracks, TOTAL_POLICIES};
use crate::government::{Ballot, Government, GovernmentTracker, VotingSession};
use crate::history::{
    EventDraft, EventId, EventKind, EventLog, GovernmentSnapshot, PrivateContent, PrivateInfoStore,
};
use crate::legislature::{LegislativeSession, Stage, PRESIDENT_HAND};
use crate::powers::{ExecutivePower, ExecutivePowerResolver, PowerOutcome};
use crate::roster::{role_distribution, PlayerRegistry};
use crate::rules::{GameResult, WinConditionEvaluator};
use crate::view::PlayerView;

/// What the caller does next after a successful `apply`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Progress {
    Continue(DecisionRequest),
    Finished(GameResult),
}

/// Internal state of the round in progress.
#[derive(Clone, Debug)]
enum Step {
    Nominating,
    Voting(VotingSession),
    Legislating {
        session: LegislativeSession,
        president_event: Option<EventId>,
    },
    Power(ExecutivePower),
    Discussion(Discussion),
    Over(GameResult),
}

/// One game of Secret Hitler.
#[derive(Clone, Debug)]
pub struct Game {
    config: GameConfig,
    registry: PlayerRegistry,
    deck: PolicyDeck,
    tracks: Tracks,
    tracker: GovernmentTracker,
    step: Step,
    phase: Phase,
    turn: u32,
    events: EventLog,
    private: PrivateInfoStore,
    history: Vec<DecisionRecord>,
    pending: Option<DecisionRequest>,
}

impl Game {
    /// Set up a table: assign roles, build the deck, and seat the first
    /// president at seat 0.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let player_count = config.player_count();
        let rng = GameRng::new(config.seed);

        let roles = match &config.roles {
            Some(roles) => roles.clone(),
            None => {
                let mut roles = role_distribution(player_count)
                    .ok_or(ConfigError::PlayerCount(player_count))?;
                rng.stream(Stream::Roles).shuffle(&mut roles);
                roles
            }
        };

        let deck_rng = rng.stream(Stream::Deck);
        let deck = match &config.deck {
            Some(top_first) => PolicyDeck::stacked(top_first.clone(), deck_rng),
            None => PolicyDeck::shuffled(full_deck(), deck_rng),
        };

        let first_president = PlayerId::new(0);
        let mut game = Self {
            registry: PlayerRegistry::new(&config.player_names, &roles),
            deck,
            tracks: Tracks::new(),
            tracker: GovernmentTracker::new(first_president),
            step: Step::Nominating,
            phase: Phase::Nominating,
            turn: 1,
            events: EventLog::new(),
            private: PrivateInfoStore::new(player_count),
            history: Vec::new(),
            pending: None,
            config,
        };

        game.log(EventDraft::new(EventKind::GameStarted {
            players: player_count,
            first_president,
        }));
        game.pending = Some(game.nomination_request());

        info!(players = player_count, seed = game.config.seed, "Game started");
        Ok(game)
    }

    // === Queries ===

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn registry(&self) -> &PlayerRegistry {
        &self.registry
    }

    #[must_use]
    pub fn tracks(&self) -> &Tracks {
        &self.tracks
    }

    #[must_use]
    pub fn government(&self) -> &GovernmentTracker {
        &self.tracker
    }

    #[must_use]
    pub fn deck(&self) -> &PolicyDeck {
        &self.deck
    }

    #[must_use]
    pub fn events(&self) -> &EventLog {
        &self.events
    }

    #[must_use]
    pub fn private_info(&self) -> &PrivateInfoStore {
        &self.private
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Current turn. Starts at 1 and advances with every presidency.
    #[must_use]
    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// The decision the game is waiting for. `None` once the game is over.
    #[must_use]
    pub fn pending(&self) -> Option<&DecisionRequest> {
        self.pending.as_ref()
    }

    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        match self.step {
            Step::Over(result) => Some(result),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.result().is_some()
    }

    /// Every accepted decision, in order.
    #[must_use]
    pub fn history(&self) -> &[DecisionRecord] {
        &self.history
    }

    /// Cards currently held by the president or chancellor.
    #[must_use]
    pub fn hand(&self) -> &[Policy] {
        match &self.step {
            Step::Legislating { session, .. } => session.hand(),
            _ => &[],
        }
    }

    /// What `viewer` is allowed to see right now.
    #[must_use]
    pub fn view(&self, viewer: PlayerId) -> PlayerView {
        PlayerView::project(self, Some(viewer))
    }

    /// What a spectator with no seat sees.
    #[must_use]
    pub fn public_view(&self) -> PlayerView {
        PlayerView::project(self, None)
    }

    // === Mutation ===

    /// Apply `player`'s answer to the pending decision.
    ///
    /// A `DecisionError` leaves the game unchanged. A `RulesViolation`
    /// means the engine itself is broken and the game cannot continue.
    pub fn apply(
        &mut self,
        player: PlayerId,
        response: DecisionResponse,
    ) -> Result<Progress, GameError> {
        let Some(request) = &self.pending else {
            return Err(DecisionError::GameOver.into());
        };

        let option = match request.validate(player, &response) {
            Ok(option) => option,
            Err(err) => {
                warn!(%player, kind = ?request.kind, error = %err, "Decision rejected");
                return Err(err.into());
            }
        };

        debug!(%player, kind = ?request.kind, ?option, turn = self.turn, "Decision applied");
        self.pending = None;
        self.history.push(DecisionRecord {
            player,
            response: response.clone(),
            turn: self.turn,
            sequence: self.history.len() as u32,
        });

        let progress = self
            .dispatch(player, option, response)
            .and_then(|progress| self.check_conservation().map(|()| progress));

        progress.map_err(|violation| {
            error!(error = %violation, phase = %self.phase, turn = self.turn, "Rules violation");
            GameError::from(violation)
        })
    }

    fn dispatch(
        &mut self,
        player: PlayerId,
        option: DecisionOption,
        response: DecisionResponse,
    ) -> Result<Progress, RulesViolation> {
        let step = std::mem::replace(&mut self.step, Step::Nominating);

        match (step, option) {
            (Step::Nominating, DecisionOption::Player(chancellor)) => {
                self.nominate(player, chancellor, response.justification)
            }
            (Step::Voting(session), DecisionOption::Ja | DecisionOption::Nein) => {
                let ballot = Ballot {
                    voter: player,
                    ja: option == DecisionOption::Ja,
                    justification: response.justification,
                };
                self.vote(session, ballot)
            }
            (Step::Legislating { mut session, .. }, DecisionOption::Policy(_))
                if session.stage() == Stage::President =>
            {
                let president_event = Some(self.president_discard(&mut session, response)?);
                let chancellor = session.government().chancellor;
                let request = DecisionRequest::new(
                    DecisionKind::ChancellorDiscard,
                    chancellor,
                    session.discard_options(),
                    self.turn,
                );
                self.enter(
                    Step::Legislating {
                        session,
                        president_event,
                    },
                    Phase::ChancellorDiscard,
                );
                self.request(request)
            }
            (
                Step::Legislating {
                    session,
                    president_event,
                },
                DecisionOption::Policy(_),
            ) => self.chancellor_discard(session, president_event, response),
            (Step::Power(power), DecisionOption::Player(target)) => {
                self.use_power(power, target, response.justification)
            }
            (Step::Discussion(mut talk), DecisionOption::Speak | DecisionOption::Pass) => {
                let message = match option {
                    DecisionOption::Speak => response.message().map(str::to_owned),
                    _ => None,
                };
                self.log(
                    EventDraft::new(EventKind::Discussion { message })
                        .by(player)
                        .related(Some(talk.opened_by())),
                );
                talk.advance();
                match talk.next_speaker() {
                    Some(next) => {
                        self.enter(Step::Discussion(talk), Phase::Discussion);
                        self.request(Self::discussion_request(next, self.turn))
                    }
                    None => self.resume(talk.resume()),
                }
            }
            (step, option) => {
                self.step = step;
                Err(RulesViolation::PhaseMismatch(option))
            }
        }
    }

    // === Transitions ===

    fn nominate(
        &mut self,
        president: PlayerId,
        chancellor: PlayerId,
        justification: Option<String>,
    ) -> Result<Progress, RulesViolation> {
        self.tracker.nominate(chancellor);
        let event = self.log(
            EventDraft::new(EventKind::Nominated { president, chancellor })
                .by(president)
                .justified(justification),
        );
        info!(%president, %chancellor, turn = self.turn, "Chancellor nominated");

        let government = Government { president, chancellor };
        self.discuss(president, event, Resume::Vote(government))
    }

    fn vote(
        &mut self,
        mut session: VotingSession,
        ballot: Ballot,
    ) -> Result<Progress, RulesViolation> {
        let voter = ballot.voter;
        session.cast(ballot)?;

        if let Some(next) = session.next_voter() {
            self.log(EventDraft::new(EventKind::BallotCast).by(voter));
            self.enter(Step::Voting(session), Phase::Voting);
            return self.request(Self::vote_request(next, self.turn));
        }

        let government = session.government();
        let (tally, ballots) = session.close()?;
        let passed = tally.passed();

        if passed {
            self.tracker.elect();
        } else {
            self.tracker.reject();
        }
        let rejections = self.tracker.rejections();

        let event = self.log(EventDraft::new(EventKind::ElectionResult {
            government,
            ballots,
            tally,
            passed,
            rejections,
        }));
        info!(
            president = %government.president,
            chancellor = %government.chancellor,
            ja = tally.ja,
            nein = tally.nein,
            passed,
            "Election resolved"
        );

        if passed {
            let chancellor_role = self.registry.role(government.chancellor);
            if let Some(result) =
                WinConditionEvaluator::after_election(&self.tracks, chancellor_role)
            {
                return Ok(self.finish(result, event));
            }
            return self.discuss(government.president, event, Resume::Legislate(government));
        }

        let threshold = self.config.chaos_threshold.resolve(self.registry.living_count());
        if rejections >= threshold {
            return self.chaos(event);
        }
        self.end_round()
    }

    fn president_discard(
        &mut self,
        session: &mut LegislativeSession,
        response: DecisionResponse,
    ) -> Result<EventId, RulesViolation> {
        let government = session.government();
        let outcome = session.president_discard(response.choice)?;
        self.deck.discard([outcome.discarded]);

        let event = self.log(
            EventDraft::new(EventKind::PresidentDiscarded { claim: response.claim })
                .by(government.president)
                .justified(response.justification),
        );
        self.remember(
            government.president,
            PrivateContent::PolicyChoice {
                seat: Stage::President,
                seen: outcome.seen,
                discarded: outcome.discarded,
                claimed: response.claim,
                passed: outcome.passed,
                enacted: None,
            },
            self.config.private_info_horizon,
            event,
        );
        debug!(president = %government.president, "President passed two policies");
        Ok(event)
    }

    fn chancellor_discard(
        &mut self,
        session: LegislativeSession,
        president_event: Option<EventId>,
        response: DecisionResponse,
    ) -> Result<Progress, RulesViolation> {
        let government = session.government();
        let outcome = session.chancellor_discard(response.choice)?;
        self.deck.discard([outcome.discarded]);
        self.tracks.enact(outcome.enacted);

        let event = self.log(
            EventDraft::new(EventKind::PolicyEnacted {
                policy: outcome.enacted,
                claim: response.claim,
                chaos: false,
            })
            .by(government.chancellor)
            .justified(response.justification)
            .related(president_event),
        );
        self.remember(
            government.chancellor,
            PrivateContent::PolicyChoice {
                seat: Stage::Chancellor,
                seen: outcome.seen,
                discarded: outcome.discarded,
                claimed: response.claim,
                passed: smallvec![outcome.enacted],
                enacted: Some(outcome.enacted),
            },
            self.config.private_info_horizon,
            event,
        );

        self.after_enactment(outcome.enacted, event, Some(government.chancellor))
    }

    /// Too many rejected governments: enact the top policy unopposed.
    fn chaos(&mut self, election: EventId) -> Result<Progress, RulesViolation> {
        let drawn = self.deck.draw(1)?;
        let policy = drawn
            .first()
            .copied()
            .ok_or(RulesViolation::DeckExhausted { requested: 1, available: 0 })?;
        self.tracker.reset_rejections();
        self.tracks.enact(policy);

        let event = self.log(
            EventDraft::new(EventKind::PolicyEnacted {
                policy,
                claim: None,
                chaos: true,
            })
            .related(Some(election)),
        );
        warn!(%policy, turn = self.turn, "Chaos: top policy enacted");

        self.after_enactment(policy, event, None)
    }

    /// Win checks, reshuffle, and power grant after any enactment.
    fn after_enactment(
        &mut self,
        policy: Policy,
        event: EventId,
        discuss_from: Option<PlayerId>,
    ) -> Result<Progress, RulesViolation> {
        info!(
            %policy,
            liberal = self.tracks.liberal,
            fascist = self.tracks.fascist,
            "Policy enacted"
        );
        if let Some(result) = WinConditionEvaluator::after_enactment(&self.tracks) {
            return Ok(self.finish(result, event));
        }

        self.deck.ensure(PRESIDENT_HAND);

        let power = match policy {
            Policy::Fascist => {
                ExecutivePowerResolver::granted(&self.tracks, self.registry.player_count())
            }
            Policy::Liberal => None,
        };
        let resume = power.map_or(Resume::EndRound, Resume::Power);

        match discuss_from {
            Some(initiator) => self.discuss(initiator, event, resume),
            None => self.resume(resume),
        }
    }

    fn use_power(
        &mut self,
        power: ExecutivePower,
        target: PlayerId,
        justification: Option<String>,
    ) -> Result<Progress, RulesViolation> {
        let president = self.tracker.president();
        let outcome = ExecutivePowerResolver::resolve_targeted(
            power,
            president,
            target,
            &mut self.registry,
            &mut self.tracker,
        )?;

        let event = self.log(
            EventDraft::new(EventKind::PowerUsed {
                power,
                target: Some(target),
            })
            .by(president)
            .justified(justification),
        );

        match outcome {
            PowerOutcome::Investigated { target, party } => {
                self.remember(
                    president,
                    PrivateContent::Investigation { target, party },
                    self.config.private_info_horizon,
                    event,
                );
            }
            PowerOutcome::Executed { was_hitler, .. } => {
                if let Some(result) = WinConditionEvaluator::after_execution(was_hitler) {
                    return Ok(self.finish(result, event));
                }
            }
            PowerOutcome::SpecialElection { .. } | PowerOutcome::Peeked { .. } => {}
        }

        self.discuss(president, event, Resume::EndRound)
    }

    /// Open a discussion, or skip straight to `resume` when disabled.
    fn discuss(
        &mut self,
        initiator: PlayerId,
        opened_by: EventId,
        resume: Resume,
    ) -> Result<Progress, RulesViolation> {
        let order = self.registry.living_from(initiator);
        let talk = Discussion::new(&order, self.config.discussion_rounds, opened_by, resume);

        match talk.next_speaker() {
            Some(first) => {
                self.enter(Step::Discussion(talk), Phase::Discussion);
                self.request(Self::discussion_request(first, self.turn))
            }
            None => self.resume(resume),
        }
    }

    fn resume(&mut self, resume: Resume) -> Result<Progress, RulesViolation> {
        match resume {
            Resume::Vote(government) => {
                let voters: Vec<PlayerId> = self.registry.living().collect();
                let first = voters.first().copied().ok_or(RulesViolation::NoLivingPresident)?;
                self.enter(Step::Voting(VotingSession::new(government, voters)), Phase::Voting);
                self.request(Self::vote_request(first, self.turn))
            }
            Resume::Legislate(government) => {
                let drawn = self.deck.draw(PRESIDENT_HAND)?;
                let session = LegislativeSession::open(government, drawn)?;
                let request = DecisionRequest::new(
                    DecisionKind::PresidentDiscard,
                    government.president,
                    session.discard_options(),
                    self.turn,
                );
                self.enter(
                    Step::Legislating {
                        session,
                        president_event: None,
                    },
                    Phase::PresidentDiscard,
                );
                self.request(request)
            }
            Resume::Power(power) if !power.needs_target() => self.peek(),
            Resume::Power(power) => {
                let president = self.tracker.president();
                let request = DecisionRequest::new(
                    DecisionKind::PowerTarget(power),
                    president,
                    ExecutivePowerResolver::targets(president, &self.registry),
                    self.turn,
                );
                self.enter(Step::Power(power), Phase::PowerResolution);
                info!(%president, %power, "Executive power granted");
                self.request(request)
            }
            Resume::EndRound => self.end_round(),
        }
    }

    /// Policy peek needs no decision and resolves on the spot.
    fn peek(&mut self) -> Result<Progress, RulesViolation> {
        let president = self.tracker.president();
        self.phase = Phase::PowerResolution;

        let PowerOutcome::Peeked { upcoming } = ExecutivePowerResolver::peek(&self.deck) else {
            return Err(RulesViolation::UnexpectedTarget(ExecutivePower::PolicyPeek));
        };
        let event = self.log(
            EventDraft::new(EventKind::PowerUsed {
                power: ExecutivePower::PolicyPeek,
                target: None,
            })
            .by(president),
        );
        self.remember(
            president,
            PrivateContent::PolicyPeek { upcoming },
            self.config.peek_horizon,
            event,
        );
        info!(%president, "Policy peek resolved");

        self.discuss(president, event, Resume::EndRound)
    }

    fn end_round(&mut self) -> Result<Progress, RulesViolation> {
        let president = self.tracker.advance(&self.registry)?;
        self.turn += 1;
        let pruned = self.private.prune(self.turn);
        debug!(turn = self.turn, %president, pruned, "New round");

        let request = self.nomination_request();
        if request.options.is_empty() {
            return Err(RulesViolation::NoEligibleCandidate { president });
        }
        self.enter(Step::Nominating, Phase::Nominating);
        self.request(request)
    }

    fn finish(&mut self, result: GameResult, cause: EventId) -> Progress {
        self.enter(Step::Over(result), Phase::GameOver);
        self.pending = None;
        self.log(EventDraft::new(EventKind::GameEnded { result }).related(Some(cause)));
        info!(winner = %result.winner, reason = %result.reason, turn = self.turn, "Game over");
        Progress::Finished(result)
    }

    // === Helpers ===

    fn enter(&mut self, step: Step, phase: Phase) {
        if phase != self.phase {
            debug!(from = %self.phase, to = %phase, "Phase change");
        }
        self.step = step;
        self.phase = phase;
    }

    fn request(&mut self, request: DecisionRequest) -> Result<Progress, RulesViolation> {
        if !self.registry.is_alive(request.player) {
            return Err(RulesViolation::DeadPlayerRequested(request.player));
        }
        self.pending = Some(request.clone());
        Ok(Progress::Continue(request))
    }

    fn log(&mut self, draft: EventDraft) -> EventId {
        self.events.append(self.turn, self.phase, draft)
    }

    fn remember(&mut self, owner: PlayerId, content: PrivateContent, horizon: u32, event: EventId) {
        let government = GovernmentSnapshot {
            president: self.tracker.president(),
            chancellor: self.tracker.chancellor(),
            tracks: self.tracks,
        };
        self.private
            .record(owner, content, self.turn, horizon, Some(event), government);
    }

    fn nomination_request(&self) -> DecisionRequest {
        let president = self.tracker.president();
        let options = self
            .tracker
            .eligible_chancellors(&self.registry)
            .into_iter()
            .map(DecisionOption::Player)
            .collect();
        DecisionRequest::new(DecisionKind::Nomination, president, options, self.turn)
    }

    fn vote_request(voter: PlayerId, turn: u32) -> DecisionRequest {
        DecisionRequest::new(
            DecisionKind::Vote,
            voter,
            vec![DecisionOption::Ja, DecisionOption::Nein],
            turn,
        )
    }

    fn discussion_request(speaker: PlayerId, turn: u32) -> DecisionRequest {
        DecisionRequest::new(
            DecisionKind::Discussion,
            speaker,
            vec![DecisionOption::Speak, DecisionOption::Pass],
            turn,
        )
    }

    /// Every card is in the draw pile, the discard pile, a hand, or on a track.
    fn check_conservation(&self) -> Result<(), RulesViolation> {
        let counted = self.deck.draw_len()
            + self.deck.discard_len()
            + self.hand().len()
            + self.tracks.enacted_total();
        if counted != TOTAL_POLICIES {
            return Err(RulesViolation::ConservationBroken { counted });
        }
        Ok(())
    }
}
