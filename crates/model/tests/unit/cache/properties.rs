//! Cache Engine Property Tests.
//!
//! Replays randomized access sequences over small geometries and checks the
//! engine against the independent reference model, plus the structural
//! invariants that must hold after every single access.

use proptest::prelude::*;

use cachesim_core::{CacheGeometry, CacheSim, MemAddr, Operation};

use crate::common::OracleCache;

fn operation(is_store: bool) -> Operation {
    if is_store {
        Operation::Store
    } else {
        Operation::Load
    }
}

proptest! {
    /// The engine's statistics agree with the reference model on arbitrary
    /// access sequences across a range of small geometries.
    #[test]
    fn engine_matches_reference_model(
        accesses in proptest::collection::vec((any::<bool>(), 0u64..0x1000), 1..256),
        index_bits in 0u32..3,
        offset_bits in 0u32..3,
        associativity in 1usize..4,
    ) {
        let geometry = CacheGeometry::new(index_bits, offset_bits, associativity).unwrap();
        let mut engine = CacheSim::new(geometry).unwrap();
        let mut oracle = OracleCache::new(geometry);

        for &(is_store, addr) in &accesses {
            engine.access(operation(is_store), MemAddr::new(addr));
            oracle.access(operation(is_store), MemAddr::new(addr));
        }

        prop_assert_eq!(engine.stats(), &oracle.stats);
    }

    /// Structural invariants hold after every access: occupancy within the
    /// associativity bound, hit/miss totals matching the access count,
    /// evictions bounded by misses, and dirty bytes a non-negative whole
    /// number of resident blocks.
    #[test]
    fn invariants_hold_after_every_access(
        accesses in proptest::collection::vec((any::<bool>(), 0u64..0x100), 1..128),
        associativity in 1usize..4,
    ) {
        let geometry = CacheGeometry::new(1, 2, associativity).unwrap();
        let mut engine = CacheSim::new(geometry).unwrap();
        let capacity_bytes =
            geometry.block_bytes() * (geometry.set_count() * geometry.associativity) as u64;

        for (i, &(is_store, addr)) in accesses.iter().enumerate() {
            engine.access(operation(is_store), MemAddr::new(addr));
            let stats = engine.stats();

            for set_index in 0..geometry.set_count() {
                let occupancy = engine.occupancy(set_index).unwrap_or(usize::MAX);
                prop_assert!(occupancy <= geometry.associativity);
            }
            prop_assert_eq!(stats.hits + stats.misses, (i + 1) as u64);
            prop_assert!(stats.evictions <= stats.misses);
            prop_assert_eq!(stats.dirty_bytes % geometry.block_bytes(), 0);
            prop_assert!(stats.dirty_bytes <= capacity_bytes);
        }
    }

    /// The first access to a tag never hits, whatever preceded it in other
    /// sets or with other tags.
    #[test]
    fn fresh_tag_never_hits(
        warmup in proptest::collection::vec(0u64..0x40, 0..32),
    ) {
        let geometry = CacheGeometry::new(1, 2, 2).unwrap();
        let mut engine = CacheSim::new(geometry).unwrap();

        for &addr in &warmup {
            engine.access(Operation::Load, MemAddr::new(addr));
        }

        // 0x1000 is far above the warmup address range: its tag is fresh.
        let outcome = engine.access(Operation::Load, MemAddr::new(0x1000));
        prop_assert!(!outcome.is_hit());
    }
}
