//! Cost Tables
//!
//! A `CostTable` maps each level to the resource cost of leveling up from it.
//! Tables are built once and never change, so a prefix-sum array is computed
//! alongside the costs and range totals become two lookups.

use thiserror::Error;

use crate::costs::{Cost, Level};

/// Highest level a table may hold. Tables are stored densely up to their
/// highest level, so this bounds the allocation.
pub const MAX_TABLE_LEVEL: Level = 100_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CostEntry {
    pub level: Level,
    pub cost: Cost,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum TableError {
    #[error("max level must be at least 1")]
    EmptyLevelRange,
    #[error("{name} must be a finite positive number, got {value}")]
    InvalidConstant { name: &'static str, value: f64 },
    #[error("cost for level {level} does not fit in a cost value")]
    CostOverflow { level: Level },
    #[error("level must be at least 1")]
    ZeroLevel,
    #[error("duplicate cost entry for level {level}")]
    DuplicateLevel { level: Level },
    #[error("level {level} exceeds the table limit of {max}", max = MAX_TABLE_LEVEL)]
    LevelTooHigh { level: Level },
}

/// Immutable level -> cost lookup.
///
/// `costs[i]` holds the entry for level `i + 1`. `prefix[k]` is the sum of
/// every known cost for levels `1..=k`, so `prefix[0]` is always 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CostTable {
    costs: Vec<Option<Cost>>,
    prefix: Vec<Cost>,
}

impl CostTable {
    /// Builds a dense table with `cost = floor(base * level^exponent)` for
    /// every level in `1..=max_level`.
    ///
    /// # Errors
    ///
    /// - `EmptyLevelRange` when `max_level` is 0
    /// - `LevelTooHigh` when `max_level` exceeds `MAX_TABLE_LEVEL`
    /// - `InvalidConstant` when `base` or `exponent` is not finite and positive
    /// - `CostOverflow` when a cost or the running total does not fit in `Cost`
    pub fn build(max_level: Level, base: f64, exponent: f64) -> Result<Self, TableError> {
        if max_level == 0 {
            return Err(TableError::EmptyLevelRange);
        }
        check_level(max_level)?;
        check_constant("base", base)?;
        check_constant("exponent", exponent)?;

        let mut costs = Vec::with_capacity(max_level as usize);
        for level in 1..=max_level {
            let cost = (base * f64::from(level).powf(exponent)).floor();
            if !cost.is_finite() || cost >= Cost::MAX as f64 {
                return Err(TableError::CostOverflow { level });
            }
            costs.push(Some(cost as Cost));
        }
        Self::from_costs(costs)
    }

    /// Builds a table from explicit entries. Levels may be sparse; missing
    /// levels have no entry and count as zero when aggregated.
    ///
    /// # Errors
    ///
    /// - `ZeroLevel` when an entry has level 0
    /// - `LevelTooHigh` when an entry lies above `MAX_TABLE_LEVEL`
    /// - `DuplicateLevel` when two entries share a level
    /// - `CostOverflow` when the running total does not fit in `Cost`
    pub fn from_entries<I>(entries: I) -> Result<Self, TableError>
    where
        I: IntoIterator<Item = CostEntry>,
    {
        let mut costs: Vec<Option<Cost>> = Vec::new();
        for entry in entries {
            if entry.level == 0 {
                return Err(TableError::ZeroLevel);
            }
            check_level(entry.level)?;
            let index = (entry.level - 1) as usize;
            if index >= costs.len() {
                costs.resize(index + 1, None);
            }
            if costs[index].is_some() {
                return Err(TableError::DuplicateLevel { level: entry.level });
            }
            costs[index] = Some(entry.cost);
        }
        Self::from_costs(costs)
    }

    fn from_costs(costs: Vec<Option<Cost>>) -> Result<Self, TableError> {
        let mut prefix = Vec::with_capacity(costs.len() + 1);
        let mut total: Cost = 0;
        prefix.push(total);
        for (index, cost) in costs.iter().enumerate() {
            total = total
                .checked_add(cost.unwrap_or(0))
                .ok_or(TableError::CostOverflow {
                    level: index as Level + 1,
                })?;
            prefix.push(total);
        }
        Ok(Self { costs, prefix })
    }

    #[cfg(test)]
    pub fn get(&self, level: Level) -> Option<Cost> {
        let index = level.checked_sub(1)? as usize;
        self.costs.get(index).copied().flatten()
    }

    /// Highest level the table covers, or 0 for an empty table.
    pub fn max_level(&self) -> Level {
        self.costs.len() as Level
    }

    /// Number of levels that have an entry.
    pub fn len(&self) -> usize {
        self.costs.iter().filter(|cost| cost.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn entries(&self) -> impl Iterator<Item = CostEntry> + '_ {
        self.costs.iter().enumerate().filter_map(|(index, cost)| {
            cost.map(|cost| CostEntry {
                level: index as Level + 1,
                cost,
            })
        })
    }

    /// Sum of every known cost for levels `1..=level`. Levels past the end of
    /// the table add nothing.
    pub(crate) fn cumulative(&self, level: Level) -> Cost {
        let index = (level as usize).min(self.costs.len());
        self.prefix[index]
    }
}

fn check_level(level: Level) -> Result<(), TableError> {
    if level > MAX_TABLE_LEVEL {
        return Err(TableError::LevelTooHigh { level });
    }
    Ok(())
}

fn check_constant(name: &'static str, value: f64) -> Result<(), TableError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(TableError::InvalidConstant { name, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(level: Level, cost: Cost) -> CostEntry {
        CostEntry { level, cost }
    }

    #[test]
    fn test_build_is_dense() {
        let table = CostTable::build(230, 100.0, 1.5).unwrap();
        assert_eq!(table.len(), 230);
        assert_eq!(table.max_level(), 230);

        let levels: Vec<Level> = table.entries().map(|entry| entry.level).collect();
        assert_eq!(levels, (1..=230).collect::<Vec<_>>());
        assert_eq!(table.get(0), None);
        assert_eq!(table.get(231), None);
    }

    #[test]
    fn test_build_follows_formula() {
        let table = CostTable::build(230, 100.0, 1.5).unwrap();
        assert_eq!(table.get(1), Some(100));
        assert_eq!(table.get(2), Some(282));

        for entry in table.entries() {
            let expected = (100.0 * f64::from(entry.level).powf(1.5)).floor() as Cost;
            assert_eq!(entry.cost, expected, "level {}", entry.level);
        }
    }

    #[test]
    fn test_build_is_non_decreasing() {
        let table = CostTable::build(60, 80.0, 1.5).unwrap();
        let costs: Vec<Cost> = table.entries().map(|entry| entry.cost).collect();
        assert!(costs.windows(2).all(|pair| pair[0] <= pair[1]));
    }

    #[test]
    fn test_build_rejects_bad_inputs() {
        assert_eq!(
            CostTable::build(0, 100.0, 1.5),
            Err(TableError::EmptyLevelRange)
        );
        assert!(matches!(
            CostTable::build(10, 0.0, 1.5),
            Err(TableError::InvalidConstant { name: "base", .. })
        ));
        assert!(matches!(
            CostTable::build(10, 100.0, f64::NAN),
            Err(TableError::InvalidConstant {
                name: "exponent",
                ..
            })
        ));
        assert_eq!(
            CostTable::build(10, 1e300, 1.5),
            Err(TableError::CostOverflow { level: 1 })
        );
        assert_eq!(
            CostTable::build(Level::MAX, 1.0, 1.0),
            Err(TableError::LevelTooHigh { level: Level::MAX })
        );
    }

    #[test]
    fn test_from_entries_allows_gaps() {
        let table = CostTable::from_entries(vec![entry(3, 30), entry(1, 10)]).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.max_level(), 3);
        assert_eq!(table.get(1), Some(10));
        assert_eq!(table.get(2), None);
        assert_eq!(table.get(3), Some(30));
        assert_eq!(
            table.entries().collect::<Vec<_>>(),
            vec![entry(1, 10), entry(3, 30)]
        );
    }

    #[test]
    fn test_from_entries_rejects_invalid_levels() {
        assert_eq!(
            CostTable::from_entries(vec![entry(0, 5)]),
            Err(TableError::ZeroLevel)
        );
        assert_eq!(
            CostTable::from_entries(vec![entry(2, 5), entry(2, 6)]),
            Err(TableError::DuplicateLevel { level: 2 })
        );
        assert_eq!(
            CostTable::from_entries(vec![entry(1, Cost::MAX), entry(2, 1)]),
            Err(TableError::CostOverflow { level: 2 })
        );
    }

    #[test]
    fn test_from_entries_rejects_levels_past_limit() {
        assert_eq!(
            CostTable::from_entries(vec![entry(1, 10), entry(Level::MAX, 5)]),
            Err(TableError::LevelTooHigh { level: Level::MAX })
        );
        let table = CostTable::from_entries(vec![entry(MAX_TABLE_LEVEL, 5)]).unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.max_level(), MAX_TABLE_LEVEL);
        assert_eq!(table.cumulative(MAX_TABLE_LEVEL), 5);
    }

    #[test]
    fn test_empty_table() {
        let table = CostTable::from_entries(Vec::new()).unwrap();
        assert!(table.is_empty());
        assert_eq!(table.max_level(), 0);
        assert_eq!(table.cumulative(10), 0);
    }

    #[test]
    fn test_cumulative() {
        let table = CostTable::from_entries(vec![entry(1, 1), entry(2, 2), entry(4, 4)]).unwrap();
        assert_eq!(table.cumulative(0), 0);
        assert_eq!(table.cumulative(2), 3);
        assert_eq!(table.cumulative(3), 3);
        assert_eq!(table.cumulative(4), 7);
        assert_eq!(table.cumulative(1000), 7);
    }
}
