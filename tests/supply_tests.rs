//! Piece supply tests.
//!
//! These tests verify dealing rounds from a catalog:
//! - Each round holds distinct shapes
//! - Seeded dealing is reproducible
//! - Every shape eventually gets offered

use block_blast::core::{GameRng, SupplyError};
use block_blast::shapes::ShapeCatalog;
use block_blast::supply::{PieceId, PieceSupply};
use rustc_hash::FxHashSet;

fn deal(seed: u64, rounds: usize) -> Vec<Vec<String>> {
    let catalog = ShapeCatalog::standard();
    let mut rng = GameRng::new(seed);
    let mut supply = PieceSupply::new();

    (0..rounds)
        .map(|_| {
            supply.refill(&catalog, 3, &mut rng).unwrap();
            let keys = supply.current().iter().map(|p| p.shape().key.clone()).collect();
            supply.clear();
            keys
        })
        .collect()
}

// =============================================================================
// Dealing
// =============================================================================

#[test]
fn test_same_seed_same_deals() {
    assert_eq!(deal(11, 20), deal(11, 20));
}

#[test]
fn test_different_seeds_differ() {
    assert_ne!(deal(11, 20), deal(12, 20));
}

#[test]
fn test_rounds_have_distinct_shapes() {
    for round in deal(3, 200) {
        let unique: FxHashSet<_> = round.iter().collect();
        assert_eq!(unique.len(), round.len());
    }
}

#[test]
fn test_every_shape_offered_eventually() {
    let catalog = ShapeCatalog::standard();
    let seen: FxHashSet<String> = deal(99, 500).into_iter().flatten().collect();
    assert_eq!(seen.len(), catalog.len());
}

#[test]
fn test_round_not_replaced_until_empty() {
    let catalog = ShapeCatalog::standard();
    let mut rng = GameRng::new(8);
    let mut supply = PieceSupply::new();
    supply.refill(&catalog, 3, &mut rng).unwrap();

    let ids: Vec<PieceId> = supply.current().iter().map(|p| p.id()).collect();
    supply.consume(ids[0]).unwrap();
    supply.consume(ids[2]).unwrap();
    assert_eq!(supply.refill(&catalog, 3, &mut rng), Ok(false));
    assert_eq!(supply.len(), 1);

    supply.consume(ids[1]).unwrap();
    assert_eq!(supply.refill(&catalog, 3, &mut rng), Ok(true));
    assert_eq!(supply.len(), 3);
    assert!(ids.iter().all(|&id| !supply.contains(id)));
}

#[test]
fn test_consume_twice_fails() {
    let catalog = ShapeCatalog::standard();
    let mut rng = GameRng::new(8);
    let mut supply = PieceSupply::new();
    supply.refill(&catalog, 3, &mut rng).unwrap();

    let id = supply.current()[1].id();
    assert!(supply.consume(id).is_ok());
    assert_eq!(supply.consume(id).unwrap_err(), SupplyError::NotFound(id));
}

#[test]
fn test_round_can_take_whole_catalog() {
    let catalog = ShapeCatalog::standard();
    let mut rng = GameRng::new(8);
    let mut supply = PieceSupply::new();

    supply.refill(&catalog, catalog.len(), &mut rng).unwrap();
    assert_eq!(supply.len(), catalog.len());

    supply.clear();
    assert_eq!(
        supply.refill(&catalog, catalog.len() + 1, &mut rng),
        Err(SupplyError::CatalogExhausted {
            requested: catalog.len() + 1,
            available: catalog.len(),
        })
    );
}
