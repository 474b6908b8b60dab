//! The published simulation result and its renderings.

use crate::luck::LuckTier;

/// Expected per-quest yield of every item, one column per fate/luck tier.
///
/// Rows follow stable first-seen order across row A then row B; items that
/// never dropped report 0.0 rather than being omitted. Read-only once
/// produced.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpectedCountTable {
    items: Vec<String>,
    columns: Vec<Vec<f64>>,
}

impl ExpectedCountTable {
    pub(crate) fn new(items: Vec<String>, columns: Vec<Vec<f64>>) -> Self {
        debug_assert_eq!(columns.len(), LuckTier::ALL.len());
        debug_assert!(columns.iter().all(|c| c.len() == items.len()));
        Self { items, columns }
    }

    /// Distinct item names in row order.
    pub fn items(&self) -> &[String] {
        &self.items
    }

    /// Expected yield for an item at a tier, or None for an unknown item.
    pub fn get(&self, item: &str, tier: LuckTier) -> Option<f64> {
        let row = self.items.iter().position(|i| i == item)?;
        Some(self.columns[tier.index()][row])
    }

    /// Expected yield by row index.
    pub fn value_at(&self, row: usize, tier: LuckTier) -> f64 {
        self.columns[tier.index()][row]
    }

    /// Total expected items per quest at a tier, summed across all items.
    pub fn tier_total(&self, tier: LuckTier) -> f64 {
        self.columns[tier.index()].iter().sum()
    }

    /// Renders the table as an aligned text grid, cells to 2 decimal places.
    pub fn to_text(&self) -> String {
        let name_width = self
            .items
            .iter()
            .map(|i| i.len())
            .max()
            .unwrap_or(0)
            .max("Item".len());

        let mut out = String::new();
        out.push_str(&format!("{:<name_width$}", "Item"));
        for tier in LuckTier::ALL {
            out.push_str(&format!("  {:>9}", tier.label()));
        }
        out.push('\n');
        out.push_str(&"-".repeat(name_width + 11 * LuckTier::ALL.len()));
        out.push('\n');

        for (row, item) in self.items.iter().enumerate() {
            out.push_str(&format!("{item:<name_width$}"));
            for tier in LuckTier::ALL {
                out.push_str(&format!("  {:>9.2}", self.value_at(row, tier)));
            }
            out.push('\n');
        }

        out
    }

    /// Renders the table as JSON for further analysis.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "[]".to_string())
    }
}

impl serde::Serialize for ExpectedCountTable {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;

        struct Row<'a> {
            item: &'a str,
            values: [f64; 5],
        }

        impl serde::Serialize for Row<'_> {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                use serde::ser::SerializeStruct;

                let mut state = serializer.serialize_struct("Row", 6)?;
                state.serialize_field("item", self.item)?;
                state.serialize_field("horrible", &self.values[0])?;
                state.serialize_field("bad", &self.values[1])?;
                state.serialize_field("default", &self.values[2])?;
                state.serialize_field("good", &self.values[3])?;
                state.serialize_field("great", &self.values[4])?;
                state.end()
            }
        }

        let mut seq = serializer.serialize_seq(Some(self.items.len()))?;
        for (row, item) in self.items.iter().enumerate() {
            let mut values = [0.0; 5];
            for tier in LuckTier::ALL {
                values[tier.index()] = self.value_at(row, tier);
            }
            seq.serialize_element(&Row { item, values })?;
        }
        seq.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_table() -> ExpectedCountTable {
        ExpectedCountTable::new(
            vec!["Scale".to_string(), "Gem".to_string()],
            vec![
                vec![4.5, 0.25],
                vec![5.0, 0.5],
                vec![5.5, 0.75],
                vec![6.0, 1.0],
                vec![6.5, 1.25],
            ],
        )
    }

    #[test]
    fn test_get_by_item_and_tier() {
        let table = sample_table();
        assert_eq!(table.get("Scale", LuckTier::Horrible), Some(4.5));
        assert_eq!(table.get("Gem", LuckTier::Great), Some(1.25));
        assert_eq!(table.get("Missing", LuckTier::Bad), None);
    }

    #[test]
    fn test_tier_total_sums_column() {
        let table = sample_table();
        assert!((table.tier_total(LuckTier::Horrible) - 4.75).abs() < f64::EPSILON);
        assert!((table.tier_total(LuckTier::Great) - 7.75).abs() < f64::EPSILON);
    }

    #[test]
    fn test_to_text_has_headers_and_two_decimal_cells() {
        let text = sample_table().to_text();
        let header = text.lines().next().unwrap();
        for label in ["Horrible", "Bad", "Default", "Good", "Great"] {
            assert!(header.contains(label), "missing header {label}: {header}");
        }
        assert!(text.contains("4.50"), "cells should use 2 decimals:\n{text}");
        assert!(text.contains("0.25"));
    }

    #[test]
    fn test_to_json_round_trips_values() {
        let json = sample_table().to_json();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed[0]["item"], "Scale");
        assert_eq!(parsed[0]["horrible"], 4.5);
        assert_eq!(parsed[1]["item"], "Gem");
        assert_eq!(parsed[1]["great"], 1.25);
    }
}
