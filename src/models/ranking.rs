//! Ranking models produced by the scenario ranker.

use rust_decimal::Decimal;
use serde::Serialize;

/// One scenario's position in a ranking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankingEntry {
    /// Position in the ranking, starting at 1 for the best scenario.
    pub rank: usize,
    /// Scenario name.
    pub name: String,
    /// Total hours worked in the scenario.
    pub total_hours: Decimal,
    /// Total bonus earned in the scenario.
    pub total_bonus: Decimal,
    /// Total pay of the scenario.
    pub total_pay: Decimal,
    /// Pay shortfall relative to the best scenario at display precision
    /// (never negative).
    pub deficit: Decimal,
    /// `deficit` as a percentage of the best scenario's pay.
    pub percentage: Decimal,
}

impl RankingEntry {
    /// Returns true for the rank-1 entry.
    pub fn is_best(&self) -> bool {
        self.rank == 1
    }
}

/// A complete ranking of two or more scenarios.
///
/// Always holds at least two entries, ordered by rank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankingResult {
    entries: Vec<RankingEntry>,
}

impl RankingResult {
    /// Wraps ranked entries. Callers guarantee at least one entry in rank order.
    pub(crate) fn new(entries: Vec<RankingEntry>) -> Self {
        debug_assert!(!entries.is_empty());
        Self { entries }
    }

    /// All entries, best first.
    pub fn entries(&self) -> &[RankingEntry] {
        &self.entries
    }

    /// The rank-1 entry.
    pub fn best(&self) -> &RankingEntry {
        &self.entries[0]
    }

    /// The lowest-ranked entry.
    pub fn worst(&self) -> &RankingEntry {
        &self.entries[self.entries.len() - 1]
    }

    /// Pay difference between the best and the worst scenario.
    pub fn spread(&self) -> Decimal {
        self.worst().deficit
    }

    /// Number of ranked scenarios.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false for a ranking built by the ranker.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(rank: usize, name: &str, pay: i64, deficit: i64) -> RankingEntry {
        RankingEntry {
            rank,
            name: name.to_string(),
            total_hours: Decimal::new(9, 0),
            total_bonus: Decimal::ZERO,
            total_pay: Decimal::new(pay, 0),
            deficit: Decimal::new(deficit, 0),
            percentage: Decimal::ZERO,
        }
    }

    #[test]
    fn test_best_worst_and_spread() {
        let ranking = RankingResult::new(vec![
            entry(1, "A", 500, 0),
            entry(2, "C", 450, 50),
            entry(3, "B", 400, 100),
        ]);

        assert_eq!(ranking.best().name, "A");
        assert!(ranking.best().is_best());
        assert_eq!(ranking.worst().name, "B");
        assert_eq!(ranking.spread(), Decimal::new(100, 0));
        assert_eq!(ranking.len(), 3);
        assert!(!ranking.is_empty());
    }

    #[test]
    fn test_ranking_serializes_entries() {
        let ranking = RankingResult::new(vec![entry(1, "A", 500, 0), entry(2, "B", 400, 100)]);
        let json = serde_json::to_value(&ranking).unwrap();
        assert_eq!(json["entries"][1]["name"], "B");
        assert_eq!(json["entries"][1]["deficit"], "100");
    }
}
