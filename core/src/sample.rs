use alloc::vec::Vec;
use rand::prelude::*;

/// Pick `count` distinct items in random order.
///
/// Asking for more than `items` holds is not an error, every item is returned (shuffled).
pub fn sample_distinct<T>(mut items: Vec<T>, count: usize, rng: &mut SmallRng) -> Vec<T> {
    let len = items.len();
    if count > len {
        log::warn!(
            "Sample short, requested {} but only {} available",
            count,
            len
        );
    }
    let count = count.min(len);

    // partial_shuffle settles the chosen items at the tail
    items.partial_shuffle(rng, count);
    items.split_off(len - count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::collections::BTreeSet;
    use alloc::vec;

    fn rng(seed: u64) -> SmallRng {
        SmallRng::seed_from_u64(seed)
    }

    #[test]
    fn draws_distinct_items_from_the_pool() {
        let pool: Vec<u32> = (0..100).collect();

        for seed in 0..20 {
            let picked = sample_distinct(pool.clone(), 6, &mut rng(seed));

            assert_eq!(picked.len(), 6);
            let unique: BTreeSet<_> = picked.iter().copied().collect();
            assert_eq!(unique.len(), 6);
            assert!(picked.iter().all(|id| pool.contains(id)));
        }
    }

    #[test]
    fn short_pool_returns_everything() {
        let picked = sample_distinct(vec!['a', 'b', 'c'], 5, &mut rng(7));

        assert_eq!(picked.len(), 3);
        let unique: BTreeSet<_> = picked.into_iter().collect();
        assert_eq!(unique, BTreeSet::from(['a', 'b', 'c']));
    }

    #[test]
    fn empty_pool_and_zero_count() {
        assert!(sample_distinct(Vec::<u8>::new(), 5, &mut rng(1)).is_empty());
        assert!(sample_distinct(vec![1, 2, 3], 0, &mut rng(1)).is_empty());
    }

    #[test]
    fn every_item_can_be_drawn() {
        let pool: Vec<u32> = (0..10).collect();
        let seen: BTreeSet<u32> = (0..200)
            .flat_map(|seed| sample_distinct(pool.clone(), 2, &mut rng(seed)))
            .collect();

        assert_eq!(seen, pool.into_iter().collect());
    }

    #[test]
    fn same_seed_same_sample() {
        let pool: Vec<u32> = (0..50).collect();

        assert_eq!(
            sample_distinct(pool.clone(), 5, &mut rng(42)),
            sample_distinct(pool, 5, &mut rng(42))
        );
    }
}
