//! Property-based tests for the queue controller
//!
//! Random command sequences must keep the queue navigable and the
//! previous/next predicates consistent with the position.

use podcastr_core::Episode;
use podcastr_playback::{PlayerConfig, QueueController};
use proptest::prelude::*;
use std::time::Duration;

// ===== Helpers =====

#[derive(Debug, Clone)]
enum Op {
    Play,
    PlayList(usize, usize),
    Clear,
    TogglePlay,
    SetPlaying(bool),
    ToggleLoop,
    ToggleShuffle,
    Next,
    Previous,
}

fn arbitrary_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        Just(Op::Play),
        (1usize..20, 0usize..25).prop_map(|(len, index)| Op::PlayList(len, index)),
        Just(Op::Clear),
        Just(Op::TogglePlay),
        any::<bool>().prop_map(Op::SetPlaying),
        Just(Op::ToggleLoop),
        Just(Op::ToggleShuffle),
        Just(Op::Next),
        Just(Op::Previous),
    ]
}

fn episodes(len: usize) -> Vec<Episode> {
    (0..len)
        .map(|i| {
            Episode::new(
                format!("ep-{}", i),
                format!("Episode {}", i),
                format!("https://cdn.example.com/{}.m4a", i),
                Duration::from_secs(60 + i as u64),
            )
        })
        .collect()
}

fn apply(controller: &mut QueueController, op: &Op) {
    match op {
        Op::Play => controller.play(episodes(1).remove(0)),
        Op::PlayList(len, index) => {
            controller.play_list(episodes(*len), *index).ok();
        }
        Op::Clear => controller.clear_player_state(),
        Op::TogglePlay => controller.toggle_play(),
        Op::SetPlaying(playing) => controller.set_playing_state(*playing),
        Op::ToggleLoop => controller.toggle_loop(),
        Op::ToggleShuffle => controller.toggle_shuffle(),
        Op::Next => controller.play_next(),
        Op::Previous => controller.play_previous(),
    }
}

fn seeded(seed: u64) -> QueueController {
    QueueController::new(PlayerConfig {
        shuffle_seed: Some(seed),
        ..Default::default()
    })
}

// ===== Property Tests =====

proptest! {
    /// Property: position always addresses an episode, or is 0 when empty
    #[test]
    fn position_stays_in_bounds(
        seed in any::<u64>(),
        ops in prop::collection::vec(arbitrary_op(), 1..60)
    ) {
        let mut controller = seeded(seed);

        for op in &ops {
            apply(&mut controller, op);

            if controller.is_empty() {
                prop_assert_eq!(controller.current_index(), 0);
                prop_assert!(controller.current_episode().is_none());
            } else {
                prop_assert!(controller.current_index() < controller.len());
                prop_assert!(controller.current_episode().is_some());
            }
        }
    }

    /// Property: previous/next predicates follow from position and flags
    #[test]
    fn predicates_match_position(
        seed in any::<u64>(),
        ops in prop::collection::vec(arbitrary_op(), 1..60)
    ) {
        let mut controller = seeded(seed);

        for op in &ops {
            apply(&mut controller, op);

            let index = controller.current_index();
            prop_assert_eq!(controller.has_previous(), index > 0);
            prop_assert_eq!(
                controller.has_next(),
                controller.is_shuffling() || index + 1 < controller.len()
            );
        }
    }

    /// Property: next without anything after is a no-op
    #[test]
    fn next_at_end_is_noop(len in 1usize..20) {
        let mut controller = QueueController::default();
        controller.play_list(episodes(len), len - 1).unwrap();
        controller.drain_events();

        controller.play_next();

        prop_assert_eq!(controller.current_index(), len - 1);
        prop_assert!(controller.drain_events().is_empty());
    }

    /// Property: previous at the start is a no-op
    #[test]
    fn previous_at_start_is_noop(len in 1usize..20, shuffling in any::<bool>()) {
        let mut controller = QueueController::default();
        controller.play_list(episodes(len), 0).unwrap();
        if shuffling {
            controller.toggle_shuffle();
        }
        controller.drain_events();

        controller.play_previous();

        prop_assert_eq!(controller.current_index(), 0);
        prop_assert!(controller.drain_events().is_empty());
    }

    /// Property: double toggles restore the flags
    #[test]
    fn double_toggle_restores_flags(
        seed in any::<u64>(),
        ops in prop::collection::vec(arbitrary_op(), 0..30)
    ) {
        let mut controller = seeded(seed);
        for op in &ops {
            apply(&mut controller, op);
        }
        let before = controller.flags();

        controller.toggle_play();
        controller.toggle_play();
        controller.toggle_loop();
        controller.toggle_loop();
        controller.toggle_shuffle();
        controller.toggle_shuffle();

        prop_assert_eq!(controller.flags(), before);
    }

    /// Property: play puts exactly that episode in the queue and plays it
    #[test]
    fn play_postconditions(
        seed in any::<u64>(),
        ops in prop::collection::vec(arbitrary_op(), 0..30)
    ) {
        let mut controller = seeded(seed);
        for op in &ops {
            apply(&mut controller, op);
        }
        let looping = controller.is_looping();
        let shuffling = controller.is_shuffling();

        let episode = Episode::new(
            "fresh",
            "Fresh",
            "https://cdn.example.com/fresh.m4a",
            Duration::from_secs(90),
        );
        controller.play(episode.clone());

        prop_assert_eq!(controller.queue(), &[episode.clone()][..]);
        prop_assert_eq!(controller.current_episode(), Some(&episode));
        prop_assert!(controller.is_playing());
        prop_assert_eq!(controller.is_looping(), looping);
        prop_assert_eq!(controller.is_shuffling(), shuffling);
    }

    /// Property: clearing keeps every flag
    #[test]
    fn clear_keeps_flags(
        seed in any::<u64>(),
        ops in prop::collection::vec(arbitrary_op(), 0..30)
    ) {
        let mut controller = seeded(seed);
        for op in &ops {
            apply(&mut controller, op);
        }
        let before = controller.flags();

        controller.clear_player_state();

        prop_assert!(controller.is_empty());
        prop_assert_eq!(controller.current_index(), 0);
        prop_assert_eq!(controller.flags(), before);
    }

    /// Property: play_list lands exactly on the requested index or rejects it
    #[test]
    fn play_list_is_checked(len in 0usize..20, index in 0usize..25) {
        let mut controller = QueueController::default();
        let result = controller.play_list(episodes(len), index);

        if index < len {
            prop_assert!(result.is_ok());
            prop_assert_eq!(controller.current_index(), index);
            prop_assert_eq!(controller.len(), len);
            prop_assert!(controller.is_playing());
        } else {
            prop_assert!(result.is_err());
            prop_assert!(controller.is_empty());
            prop_assert!(!controller.is_playing());
        }
    }

    /// Property: shuffle draws stay inside the queue
    #[test]
    fn shuffle_draws_in_range(seed in any::<u64>(), len in 1usize..30, draws in 1usize..100) {
        let mut controller = seeded(seed);
        controller.play_list(episodes(len), 0).unwrap();
        controller.toggle_shuffle();

        for _ in 0..draws {
            controller.play_next();
            prop_assert!(controller.current_index() < len);
        }
    }

    /// Property: the same seed yields the same shuffle order
    #[test]
    fn shuffle_is_reproducible(seed in any::<u64>(), len in 2usize..20) {
        let mut first = seeded(seed);
        let mut second = seeded(seed);
        for controller in [&mut first, &mut second] {
            controller.play_list(episodes(len), 0).unwrap();
            controller.toggle_shuffle();
        }

        for _ in 0..20 {
            first.play_next();
            second.play_next();
            prop_assert_eq!(first.current_index(), second.current_index());
        }
    }
}
