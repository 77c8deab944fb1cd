use std::collections::HashMap;

use rand::rngs::StdRng;
use rand::SeedableRng;
use shared::rotation::segment_under_pointer;
use shared::{Board, WheelId, WheelPhase};

fn board_with(names: &[&str]) -> (Board<StdRng>, Vec<WheelId>) {
    let mut board = Board::with_rng(StdRng::seed_from_u64(2024));
    let mut ids = vec![board.wheels()[0].id];
    for _ in 1..names.len() {
        ids.push(board.add_wheel());
    }
    for (id, text) in ids.iter().zip(names) {
        board.edit_wheel(*id, text);
    }
    (board, ids)
}

#[test]
fn redo_before_settle_only_reveals_latest_spin() {
    let (mut board, ids) = board_with(&["Ann\nBen\nCat", "Dee\nEli"]);

    let first_round = board.start_or_redo_all();
    let second_round = board.start_or_redo_all();
    assert_eq!(first_round.len(), 2);
    assert_eq!(second_round.len(), 2);

    // late completions from the superseded round arrive first
    for spin in &first_round {
        assert!(!board.settle(spin.wheel_id, spin.spin_id, &spin.name));
    }
    for id in &ids {
        let wheel = board.wheel(*id).unwrap();
        assert_eq!(wheel.phase(), WheelPhase::Spinning);
        assert!(wheel.last_result.is_none());
    }

    for spin in &second_round {
        assert!(board.settle(spin.wheel_id, spin.spin_id, &spin.name));
        let wheel = board.wheel(spin.wheel_id).unwrap();
        assert_eq!(wheel.last_result.as_deref(), Some(spin.name.as_str()));
        assert_eq!(wheel.names()[spin.selected_index], spin.name);
    }
}

#[test]
fn planned_rotations_advance_and_land_per_wheel() {
    let (mut board, _) = board_with(&["1\n2\n3\n4\n5\n6\n7", "solo", "x\ny"]);
    let mut committed_rotation: HashMap<WheelId, f64> = HashMap::new();

    for _ in 0..50 {
        for spin in board.start_or_redo_all() {
            let current = committed_rotation.get(&spin.wheel_id).copied().unwrap_or(0.0);
            let planned = board.plan_rotation(&spin, current);

            assert!(planned.target_rotation_deg > current);
            assert!((2600..3400).contains(&planned.duration_ms));
            assert_eq!(
                segment_under_pointer(planned.target_rotation_deg, spin.segment_count),
                spin.selected_index
            );

            committed_rotation.insert(spin.wheel_id, planned.target_rotation_deg);
            assert!(board.settle(spin.wheel_id, spin.spin_id, &spin.name));
        }
    }
}

#[test]
fn empty_wheel_error_does_not_block_others_and_clears_on_edit() {
    let (mut board, ids) = board_with(&["", "A\nB", ""]);

    let spins = board.start_or_redo_all();
    assert_eq!(spins.len(), 1);
    assert_eq!(spins[0].wheel_id, ids[1]);
    assert!(board.wheel(ids[0]).unwrap().error.is_some());
    assert!(board.wheel(ids[1]).unwrap().error.is_none());
    assert!(board.wheel(ids[2]).unwrap().error.is_some());

    board.edit_wheel(ids[0], "Zed");
    assert!(board.wheel(ids[0]).unwrap().error.is_none());
}

#[test]
fn same_seed_replays_same_outcomes() {
    let run = || {
        let (mut board, _) = board_with(&["a\nb\nc\nd", "e\nf\ng"]);
        (0..10)
            .flat_map(|_| board.start_or_redo_all())
            .map(|spin| spin.selected_index)
            .collect::<Vec<_>>()
    };
    assert_eq!(run(), run());
}
