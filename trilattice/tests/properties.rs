//! Property tests for the laws every board variant must obey.

use proptest::prelude::*;

use trilattice::{
    board::Coordinate,
    game::{BoardModel, InvalidConfiguration},
    geometry::{Geometry, Variant},
};

/// Play the move selected by `pick` among the currently empty vertices, if any remain.
fn play(model: &mut BoardModel, pick: usize) -> Option<Coordinate> {
    let empty: Vec<_> = model.position()?.empty_vertices().collect();
    if empty.is_empty() {
        return None;
    }
    let coord = empty[pick % empty.len()];
    assert!(model.put(coord));
    Some(coord)
}

proptest! {
    #[test]
    fn rotation_is_invertible(players in 2usize..=3, size in 2usize..6) {
        let variant = Variant::new(players, size).unwrap();
        prop_assert_eq!(variant.players().len(), players);
        for &player in variant.players() {
            prop_assert_eq!(variant.prev(variant.next(player)), player);
            prop_assert_eq!(variant.next(variant.prev(player)), player);
        }
    }

    #[test]
    fn unsupported_player_counts_are_rejected(players in 0usize..64, size in 0usize..32) {
        prop_assume!(players != 2 && players != 3);
        let mut model = BoardModel::new();
        prop_assert_eq!(
            model.reset(players, size),
            Err(InvalidConfiguration::UnsupportedPlayerCount(players))
        );
        prop_assert!(!model.is_ready());
    }

    #[test]
    fn put_then_undo_restores_position(
        players in 2usize..=3,
        size in 2usize..8,
        picks in prop::collection::vec(any::<usize>(), 0..30),
        last in any::<usize>(),
    ) {
        let mut model = BoardModel::new();
        model.reset(players, size).unwrap();
        for pick in picks {
            if play(&mut model, pick).is_none() {
                break;
            }
        }

        let before = model.position().cloned();
        if let Some(coord) = play(&mut model, last) {
            prop_assert_eq!(model.undo(), Some(coord));
            prop_assert_eq!(model.get(coord), None);
        }
        prop_assert_eq!(model.position().cloned(), before);
    }

    #[test]
    fn occupied_put_is_a_no_op(
        players in 2usize..=3,
        size in 2usize..8,
        picks in prop::collection::vec(any::<usize>(), 1..30),
        target in any::<usize>(),
    ) {
        let mut model = BoardModel::new();
        model.reset(players, size).unwrap();
        for pick in picks {
            play(&mut model, pick);
        }

        let position = model.position().cloned().unwrap();
        let owned: Vec<_> = position
            .vertices()
            .filter(|&v| position.get(v).is_some())
            .collect();
        let coord = owned[target % owned.len()];
        prop_assert!(!model.put(coord));
        prop_assert_eq!(model.position().cloned(), Some(position));
    }

    #[test]
    fn unwinding_returns_to_fresh_board(
        players in 2usize..=3,
        size in 2usize..8,
        picks in prop::collection::vec(any::<usize>(), 0..40),
    ) {
        let mut model = BoardModel::new();
        model.reset(players, size).unwrap();
        let fresh = model.position().cloned();

        let mut played = Vec::new();
        for pick in picks {
            match play(&mut model, pick) {
                Some(coord) => played.push(coord),
                None => break,
            }
        }
        prop_assert_eq!(model.history(), &played[..]);

        for &coord in played.iter().rev() {
            prop_assert_eq!(model.undo(), Some(coord));
        }
        prop_assert_eq!(model.undo(), None);
        prop_assert_eq!(model.position().cloned(), fresh);
    }
}
