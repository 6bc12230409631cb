//! Properties that must hold over arbitrary play

use libmathquiz::game::{reduce, reduce_score, Action, AppState, Game, Rules, Ticket};
use libmathquiz::question::{Mode, Question};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[test]
fn test_reduce_score_never_underflows() {
    assert_eq!(reduce_score(0), 0);
    for n in 1..100 {
        assert_eq!(reduce_score(n), n - 1);
    }
}

#[test]
fn test_score_tracks_right_and_wrong_answers() {
    let mut rng = StdRng::seed_from_u64(31337);
    let mut game = Game::new(Rules::default());
    game.update(Action::StartGame(Mode::Mixed));

    let mut expected: u32 = 0;
    for _ in 0..500 {
        let result = game.state().in_game().unwrap().question.result;
        let right = rng.gen_bool(0.4);
        let answer = if right { result } else { result + rng.gen_range(1..=5) };

        game.update(Action::ChangeText(answer.to_string()));
        game.update(Action::Submit);

        expected = if right { expected + 1 } else { expected.saturating_sub(1) };
        assert_eq!(game.state().score(), Some(expected));
    }
}

#[test]
fn test_garbage_never_changes_score() {
    let mut game = Game::new(Rules::default());
    game.update(Action::StartGame(Mode::Additions));

    for text in ["", "-", "abc", "1 2", "3.0", "٣"] {
        game.update(Action::ChangeText(text.to_string()));
        assert!(game.update(Action::Submit).is_none());
        assert_eq!(game.state().score(), Some(0));
    }
}

#[test]
fn test_clearing_empty_text_changes_nothing() {
    for mode in Mode::ALL {
        let rules = Rules::default();
        let state = reduce(AppState::Welcome, Action::StartGame(mode), &rules, Ticket::new(0)).state;
        let state = reduce(
            state,
            Action::NewQuestion {
                ticket: Ticket::new(0),
                question: Question::multiplication(3, 3),
            },
            &rules,
            Ticket::new(1),
        )
        .state;

        let transition = reduce(state.clone(), Action::ChangeText(String::new()), &rules, Ticket::new(1));
        assert_eq!(transition.state, state);
        assert!(transition.command.is_none());
    }
}
