//! Shared helpers for integration tests.

#![allow(dead_code)]

use secret_hitler::core::{DecisionKind, DecisionOption, DecisionResponse, GameConfig, PlayerId};
use secret_hitler::deck::{Policy, FASCIST_POLICIES, LIBERAL_POLICIES};
use secret_hitler::game::{Game, Progress};
use secret_hitler::roster::Role;

/// Route engine logs through the test harness. Safe to call repeatedly.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("info")
        .with_test_writer()
        .try_init();
}

pub fn p(seat: u8) -> PlayerId {
    PlayerId::new(seat)
}

/// Fixed roles, no discussion.
pub fn quiet_config(roles: Vec<Role>) -> GameConfig {
    GameConfig::with_player_count(roles.len())
        .with_discussion_rounds(0)
        .with_roles(roles)
}

/// A full deck with `top` on top, the rest filled in to 6 Liberal and 11
/// Fascist policies (Liberals first).
pub fn deck_with_top(top: &[Policy]) -> Vec<Policy> {
    let liberal = top.iter().filter(|&&c| c == Policy::Liberal).count();
    let fascist = top.len() - liberal;
    let mut deck = top.to_vec();
    deck.extend(std::iter::repeat(Policy::Liberal).take(LIBERAL_POLICIES - liberal));
    deck.extend(std::iter::repeat(Policy::Fascist).take(FASCIST_POLICIES - fascist));
    deck
}

/// Answer the pending request with `option` from whoever it is addressed to.
pub fn answer(game: &mut Game, option: DecisionOption) -> Progress {
    let request = game.pending().expect("a pending decision").clone();
    let response = DecisionResponse::pick(&request, option).expect("option is legal");
    game.apply(request.player, response).expect("decision accepted")
}

/// Answer by index from whoever the request is addressed to.
pub fn answer_index(game: &mut Game, choice: usize) -> Progress {
    let player = game.pending().expect("a pending decision").player;
    game.apply(player, DecisionResponse::new(choice)).expect("decision accepted")
}

pub fn pass_discussion(game: &mut Game) {
    while game.pending().is_some_and(|r| r.kind == DecisionKind::Discussion) {
        answer(game, DecisionOption::Pass);
    }
}

pub fn nominate(game: &mut Game, chancellor: u8) -> Progress {
    let progress = answer(game, DecisionOption::Player(p(chancellor)));
    pass_discussion(game);
    progress
}

/// Every living player votes the same way.
pub fn vote_all(game: &mut Game, ja: bool) -> Progress {
    let option = if ja { DecisionOption::Ja } else { DecisionOption::Nein };
    let mut progress = answer(game, option);
    while game.pending().is_some_and(|r| r.kind == DecisionKind::Vote) {
        progress = answer(game, option);
    }
    pass_discussion(game);
    progress
}

/// President and chancellor both discard the card at the given index.
pub fn legislate(game: &mut Game, president_index: usize, chancellor_index: usize) -> Progress {
    answer_index(game, president_index);
    let progress = answer_index(game, chancellor_index);
    pass_discussion(game);
    progress
}

/// Elect a government and enact `wanted`, if the hand allows it.
pub fn elect_and_enact(game: &mut Game, chancellor: u8, wanted: Policy) -> Progress {
    nominate(game, chancellor);
    vote_all(game, true);

    let hand = game.hand().to_vec();
    let keep = hand.iter().position(|&c| c == wanted).unwrap_or(0);
    let discard = (0..hand.len()).find(|&i| i != keep).unwrap_or(0);
    answer_index(game, discard);

    let hand = game.hand().to_vec();
    let discard = hand.iter().position(|&c| c != wanted).unwrap_or(0);
    let progress = answer_index(game, discard);
    pass_discussion(game);
    progress
}

/// Reject one nominated government.
pub fn fail_election(game: &mut Game, chancellor: u8) -> Progress {
    nominate(game, chancellor);
    vote_all(game, false)
}

/// Every card is in the draw pile, the discard pile, a hand, or on a track.
pub fn conserved(game: &Game) -> bool {
    game.deck().draw_len()
        + game.deck().discard_len()
        + game.hand().len()
        + game.tracks().enacted_total()
        == 17
}

pub fn five_player_roles() -> Vec<Role> {
    vec![Role::Liberal, Role::Liberal, Role::Fascist, Role::Hitler, Role::Liberal]
}
