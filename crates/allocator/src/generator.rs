use crate::error::AllocatorError;
use configuration::AllocationGrid;
use core_types::{Allocation, Asset};
use itertools::Itertools;
use tracing::debug;

/// Generates every valid allocation on the grid: all tuples of per-asset
/// weights that are multiples of the step, lie in `[0, 100]` and sum exactly
/// to the target.
///
/// The enumeration order is lexicographic over the weight tuples (the last
/// asset's weight varies fastest) and is stable across runs; it defines the
/// row order of the output tables. Integer arithmetic throughout, so the sum
/// constraint holds exactly.
pub fn generate_allocations(grid: &AllocationGrid) -> Result<Vec<Allocation>, AllocatorError> {
    if grid.step == 0 {
        return Err(AllocatorError::Generation(
            "weight step must be positive".to_string(),
        ));
    }
    if 100 % grid.step != 0 {
        return Err(AllocatorError::Generation(format!(
            "weight step {} must divide 100",
            grid.step
        )));
    }

    // The ladder of candidate weights for a single asset: 0, step, ..., 100.
    let ladder: Vec<u32> = (0..=100).step_by(grid.step as usize).collect();

    let mut allocations = Vec::new();
    for combo in (0..Asset::COUNT)
        .map(|_| ladder.iter().copied())
        .multi_cartesian_product()
    {
        if combo.iter().sum::<u32>() != grid.target {
            continue;
        }
        let weights: [u32; Asset::COUNT] = combo.try_into().map_err(|_| {
            AllocatorError::Generation("combination has the wrong arity".to_string())
        })?;
        allocations.push(Allocation::new(weights));
    }

    debug!(
        step = grid.step,
        target = grid.target,
        count = allocations.len(),
        "generated allocation set"
    );
    Ok(allocations)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shipped_grid() -> AllocationGrid {
        AllocationGrid {
            step: 20,
            target: 100,
        }
    }

    #[test]
    fn shipped_grid_yields_exactly_126_allocations() {
        // Compositions of 100 into 5 parts with step 20: C(9, 4) = 126.
        let allocations = generate_allocations(&shipped_grid()).unwrap();
        assert_eq!(allocations.len(), 126);
    }

    #[test]
    fn every_allocation_sums_to_the_target() {
        for allocation in generate_allocations(&shipped_grid()).unwrap() {
            assert_eq!(allocation.total(), 100);
        }
    }

    #[test]
    fn every_weight_is_a_multiple_of_the_step() {
        for allocation in generate_allocations(&shipped_grid()).unwrap() {
            for &weight in allocation.weights() {
                assert_eq!(weight % 20, 0);
                assert!(weight <= 100);
            }
        }
    }

    #[test]
    fn enumeration_is_lexicographic_and_duplicate_free() {
        let allocations = generate_allocations(&shipped_grid()).unwrap();
        for pair in allocations.windows(2) {
            // Strictly increasing tuples: ordered and therefore unique.
            assert!(pair[0].weights() < pair[1].weights());
        }
        assert_eq!(allocations.first().unwrap().weights(), &[0, 0, 0, 0, 100]);
        assert_eq!(allocations.last().unwrap().weights(), &[100, 0, 0, 0, 0]);
    }

    #[test]
    fn rejects_a_zero_step() {
        let grid = AllocationGrid { step: 0, target: 100 };
        assert!(generate_allocations(&grid).is_err());
    }

    #[test]
    fn rejects_a_step_that_does_not_divide_100() {
        let grid = AllocationGrid { step: 30, target: 100 };
        assert!(generate_allocations(&grid).is_err());
    }

    #[test]
    fn unreachable_target_yields_an_empty_set() {
        let grid = AllocationGrid { step: 20, target: 10 };
        assert!(generate_allocations(&grid).unwrap().is_empty());
    }
}
