use crate::costs::{Cost, Level, table::CostTable};

/// Total cost of every level in the half-open interval `[start, end)`.
///
/// Returns 0 when `start >= end`, whatever the bounds are. Levels without an
/// entry in `table` (below 1, past the cap, or gaps in a sparse table) add
/// nothing. Never fails.
///
/// # Example
///
/// ```rust
/// let table = CostTable::build(230, 100.0, 1.5)?;
/// assert_eq!(aggregate(&table, 1, 3), 100 + 282);
/// assert_eq!(aggregate(&table, 5, 5), 0);
/// ```
pub fn aggregate(table: &CostTable, start: i64, end: i64) -> Cost {
    if start >= end {
        return 0;
    }
    let start = clamp_level(start);
    let end = clamp_level(end);
    if start >= end {
        return 0;
    }
    table.cumulative(end - 1) - table.cumulative(start - 1)
}

// Maps any integer onto 1..=Level::MAX. Everything below 1 holds no entries,
// and nothing beyond Level::MAX can exist in a table.
fn clamp_level(level: i64) -> Level {
    level.clamp(1, i64::from(Level::MAX)) as Level
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::costs::table::CostEntry;

    fn hero_table() -> CostTable {
        CostTable::build(230, 100.0, 1.5).unwrap()
    }

    fn scan(table: &CostTable, start: i64, end: i64) -> Cost {
        (start..end)
            .filter_map(|level| Level::try_from(level).ok())
            .filter_map(|level| table.get(level))
            .sum()
    }

    #[test]
    fn test_empty_and_reversed_ranges() {
        let table = hero_table();
        assert_eq!(aggregate(&table, 5, 5), 0);
        assert_eq!(aggregate(&table, 10, 1), 0);
        assert_eq!(aggregate(&table, 500, -20), 0);
        assert_eq!(aggregate(&table, 1000, 1000), 0);
    }

    #[test]
    fn test_known_values() {
        let table = hero_table();
        assert_eq!(aggregate(&table, 1, 2), 100);
        assert_eq!(aggregate(&table, 1, 3), 382);
        assert_eq!(aggregate(&table, 2, 3), 282);
    }

    #[test]
    fn test_pet_full_range() {
        let table = CostTable::build(60, 80.0, 1.5).unwrap();
        let expected: Cost = (1..60)
            .map(|level: u32| (80.0 * f64::from(level).powf(1.5)).floor() as Cost)
            .sum();
        assert_eq!(aggregate(&table, 1, 60), expected);
    }

    #[test]
    fn test_matches_linear_scan() {
        let table = hero_table();
        for start in [-5, 0, 1, 2, 17, 100, 229, 230, 231] {
            for end in [-1, 1, 2, 3, 50, 199, 230, 231, 400] {
                assert_eq!(
                    aggregate(&table, start, end),
                    scan(&table, start, end),
                    "[{start}, {end})"
                );
            }
        }
    }

    #[test]
    fn test_out_of_range_levels_cost_nothing() {
        let table = hero_table();
        assert_eq!(aggregate(&table, -10, 3), aggregate(&table, 1, 3));
        assert_eq!(
            aggregate(&table, 229, 10_000),
            table.get(229).unwrap() + table.get(230).unwrap()
        );
        assert_eq!(aggregate(&table, 231, 10_000), 0);
        assert_eq!(aggregate(&table, i64::MIN, i64::MAX), scan(&table, 1, 231));
    }

    #[test]
    fn test_gaps_are_skipped() {
        let table = CostTable::from_entries(vec![
            CostEntry { level: 1, cost: 10 },
            CostEntry { level: 3, cost: 30 },
            CostEntry { level: 6, cost: 60 },
        ])
        .unwrap();
        assert_eq!(aggregate(&table, 1, 7), 100);
        assert_eq!(aggregate(&table, 2, 3), 0);
        assert_eq!(aggregate(&table, 2, 6), 30);
        assert_eq!(aggregate(&table, 4, 6), 0);
    }

    #[test]
    fn test_monotonic_in_end() {
        let table = hero_table();
        let totals: Vec<Cost> = (1..=231).map(|end| aggregate(&table, 7, end)).collect();
        assert!(totals.windows(2).all(|pair| pair[0] <= pair[1]));
    }

    #[test]
    fn test_additive_over_split_points() {
        let table = hero_table();
        let (start, end) = (3, 212);
        for mid in start..=end {
            assert_eq!(
                aggregate(&table, start, end),
                aggregate(&table, start, mid) + aggregate(&table, mid, end),
                "mid {mid}"
            );
        }
    }

    #[test]
    fn test_deterministic() {
        let table = hero_table();
        assert_eq!(aggregate(&table, 12, 140), aggregate(&table, 12, 140));
    }
}
