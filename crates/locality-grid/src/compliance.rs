//! Grid trait compliance test helpers.
//!
//! These functions verify that a Grid implementation satisfies the
//! invariants required by the trait contract. Reused across the
//! PlainGrid, BlockedGrid and GridMethods test modules.

use crate::grid::Grid;
use indexmap::IndexSet;
use locality_core::{GridError, MapOrder};

/// Assert that traversing in `order` visits every logical cell exactly once.
pub fn assert_visits_every_cell_once<G: Grid<u32>>(grid: &mut G, order: MapOrder) {
    let shape = grid.shape();
    let mut seen = IndexSet::new();
    let mut visits = 0usize;
    grid.map(order, |c, r, s, _| {
        assert_eq!(*s, shape, "visitor got a different shape");
        assert!(shape.contains(c, r), "visited ({c}, {r}) outside the extent");
        seen.insert((c, r));
        visits += 1;
    })
    .expect("order should be supported");
    assert_eq!(visits, shape.cell_count(), "{order} visit count != cell count");
    assert_eq!(seen.len(), shape.cell_count(), "{order} visited a cell twice");
}

/// Assert that a distinct value written to every cell via `at` reads back via `get`.
pub fn assert_round_trip<G: Grid<u32>>(grid: &mut G) {
    let (w, h) = (grid.width() as i32, grid.height() as i32);
    for r in 0..h {
        for c in 0..w {
            *grid.at(c, r).unwrap() = (r * w + c) as u32;
        }
    }
    for r in 0..h {
        for c in 0..w {
            assert_eq!(*grid.get(c, r).unwrap(), (r * w + c) as u32, "cell ({c}, {r})");
        }
    }
}

/// Assert that coordinates just past each edge are rejected.
pub fn assert_out_of_range_edges<T, G: Grid<T>>(grid: &mut G) {
    let (w, h) = (grid.width() as i32, grid.height() as i32);
    for (c, r) in [(w, 0), (0, h), (-1, 0), (0, -1), (w, h), (i32::MIN, i32::MAX)] {
        assert!(
            matches!(grid.at(c, r), Err(GridError::OutOfRange { .. })),
            "at({c}, {r}) should be out of range"
        );
        assert!(
            matches!(grid.get(c, r), Err(GridError::OutOfRange { .. })),
            "get({c}, {r}) should be out of range"
        );
    }
}

/// Assert that the map table agrees with what `map` accepts, and that
/// rejected orders visit nothing.
pub fn assert_table_matches_map<G: Grid<u32>>(grid: &mut G) {
    for order in MapOrder::ALL {
        let mut visits = 0usize;
        let result = grid.map(order, |_, _, _, _| visits += 1);
        if grid.supports(order) {
            assert!(result.is_ok(), "{order} is in the table but map failed");
            assert_eq!(visits, grid.shape().cell_count());
        } else {
            assert!(
                matches!(result, Err(GridError::UnsupportedOrder { .. })),
                "{order} is not in the table but map accepted it"
            );
            assert_eq!(visits, 0, "unsupported {order} visited cells");
        }
    }
    assert!(grid.supports(grid.default_order()));
}

/// Assert that the default order and reduced visitors see every element.
pub fn assert_default_and_small_maps_agree<G: Grid<u32>>(grid: &mut G) {
    let mut n = 0u32;
    grid.small_map_default(|v| {
        *v = n;
        n += 1;
    });
    let expected: u64 = (0..u64::from(n)).sum();
    let mut full_sum = 0u64;
    grid.map_default(|_, _, _, v| full_sum += u64::from(*v));
    assert_eq!(full_sum, expected);
    let mut small_sum = 0u64;
    grid.small_map(grid.default_order(), |v| small_sum += u64::from(*v))
        .expect("default order is supported");
    assert_eq!(small_sum, expected);
}

/// Run every compliance check on a grid.
pub fn run_full_compliance<G: Grid<u32>>(grid: &mut G) {
    for order in MapOrder::ALL {
        if grid.supports(order) {
            assert_visits_every_cell_once(grid, order);
        }
    }
    assert_round_trip(grid);
    assert_out_of_range_edges::<u32, G>(grid);
    assert_table_matches_map(grid);
    assert_default_and_small_maps_agree(grid);
}
