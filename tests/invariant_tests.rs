//! Property tests: rule invariants hold at every step of random games.

mod common;

use common::conserved;
use proptest::prelude::*;
use secret_hitler::core::{
    ChaosThreshold, DecisionKind, DecisionOption, DecisionResponse, GameConfig, GameError,
    PlayerId,
};
use secret_hitler::deck::PolicyDeck;
use secret_hitler::driver::{RandomResponder, Responder};
use secret_hitler::game::{Game, Progress};
use secret_hitler::government::PRESIDENT_TERM_LIMIT_MIN_LIVING;
use secret_hitler::history::EventKind;
use secret_hitler::rules::GameResult;
use secret_hitler::GameRng;

/// Drive a game with random responders, calling `check` before every decision.
fn play(
    config: GameConfig,
    responder_seed: u64,
    mut check: impl FnMut(&Game),
) -> (Game, GameResult) {
    let mut game = Game::new(config).unwrap();
    let players = game.registry().player_count();
    let mut responders: Vec<RandomResponder> = (0..players)
        .map(|seat| {
            RandomResponder::new(responder_seed.wrapping_add(seat as u64))
                .with_speak_probability(0.1)
        })
        .collect();

    loop {
        check(&game);
        let request = game.pending().unwrap().clone();
        let view = game.view(request.player);
        let response = responders[request.player.seat()].respond(&request, &view);
        match game.apply(request.player, response) {
            Ok(Progress::Continue(_)) => {}
            Ok(Progress::Finished(result)) => {
                check(&game);
                return (game, result);
            }
            Err(err) => panic!("random responder hit {err}"),
        }
    }
}

fn config(players: usize, seed: u64) -> GameConfig {
    GameConfig::with_player_count(players)
        .with_seed(seed)
        .with_discussion_rounds(1)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// Draw pile, discard pile, hand, and tracks always add up to 17.
    #[test]
    fn prop_deck_conservation(
        players in 5usize..=10,
        seed in any::<u64>(),
        responders in any::<u64>(),
    ) {
        play(config(players, seed), responders, |game| assert!(conserved(game)));
    }

    /// Nomination options never include the last elected chancellor, nor the
    /// last elected president while five or more players live.
    #[test]
    fn prop_term_limits(players in 5usize..=10, seed in any::<u64>(), responders in any::<u64>()) {
        play(config(players, seed), responders, |game| {
            let Some(request) = game.pending() else { return };
            if request.kind != DecisionKind::Nomination {
                return;
            }
            let Some(last) = game.government().last_elected() else { return };
            let offered = |id: PlayerId| request.options.contains(&DecisionOption::Player(id));

            assert!(!offered(last.chancellor));
            assert!(!offered(request.player));
            if game.registry().living_count() >= PRESIDENT_TERM_LIMIT_MIN_LIVING {
                assert!(!offered(last.president));
            } else if last.president != request.player && game.registry().is_alive(last.president) {
                assert!(offered(last.president));
            }
            for option in &request.options {
                if let DecisionOption::Player(id) = option {
                    assert!(game.registry().is_alive(*id));
                }
            }
        });
    }

    /// An election passes exactly when Ja is a strict majority of living voters.
    #[test]
    fn prop_strict_majority(
        players in 5usize..=10,
        seed in any::<u64>(),
        responders in any::<u64>(),
    ) {
        let (game, _) = play(config(players, seed), responders, |_| {});
        for event in game.events().iter() {
            if let EventKind::ElectionResult { ballots, tally, passed, .. } = &event.kind {
                let ja = ballots.iter().filter(|b| b.ja).count();
                assert_eq!(tally.ja, ja);
                assert_eq!(tally.ja + tally.nein, ballots.len());
                assert_eq!(*passed, ja * 2 > ballots.len());
            }
        }
    }

    /// A chaos enactment follows exactly the rejection that reaches the
    /// threshold and resets the counter.
    #[test]
    fn prop_chaos_threshold(
        players in 5usize..=10,
        seed in any::<u64>(),
        responders in any::<u64>(),
        fixed in 1u8..=4,
    ) {
        let config = config(players, seed).with_chaos_threshold(ChaosThreshold::Fixed(fixed));
        let (game, _) = play(config, responders, |_| {});

        let events: Vec<_> = game.events().iter().cloned().collect();
        for (i, event) in events.iter().enumerate() {
            let EventKind::ElectionResult { passed: false, rejections, .. } = event.kind else {
                continue;
            };
            let next = events.get(i + 1).map(|e| &e.kind);
            let chaos = matches!(next, Some(EventKind::PolicyEnacted { chaos: true, .. }));
            assert_eq!(chaos, rejections >= usize::from(fixed));
            assert!(rejections <= usize::from(fixed));
        }
    }

    /// A finished game accepts nothing more and replays to the same end.
    #[test]
    fn prop_terminal_is_final(
        players in 5usize..=10,
        seed in any::<u64>(),
        responders in any::<u64>(),
    ) {
        let (mut game, result) = play(config(players, seed), responders, |_| {});
        let events = game.events().len();

        for seat in 0..players {
            let err = game.apply(PlayerId::new(seat as u8), DecisionResponse::new(0));
            assert!(matches!(err, Err(GameError::Decision(_))));
        }
        assert_eq!(game.events().len(), events);

        let replayed = game.replay().run().unwrap();
        assert_eq!(replayed.result(), Some(result));
        assert_eq!(replayed.events(), game.events());
    }

    /// Reshuffles never resurrect enacted cards.
    #[test]
    fn prop_draws_conserve_cards(
        seed in any::<u64>(),
        draws in proptest::collection::vec(1usize..=3, 1..40),
    ) {
        let mut deck = PolicyDeck::shuffled(secret_hitler::deck::full_deck(), GameRng::new(seed));
        let mut enacted = 0;
        for count in draws {
            if deck.draw_len() + deck.discard_len() < count {
                break;
            }
            let hand = deck.draw(count).unwrap();
            assert_eq!(hand.len(), count);
            let mut cards = hand.into_iter();
            if cards.next().is_some() {
                enacted += 1;
            }
            deck.discard(cards);
            assert_eq!(deck.draw_len() + deck.discard_len() + enacted, 17);
        }
    }
}
