//! Benchmark fixtures for docsize.
//!
//! Run with: `cargo bench --package docsize-bench`

use docsize_lib::{Field, Schema, SchemaNode, SizeConfig, StatisticsTable, TypeSize, TypeSizeTable};

/// Statistic giving the length of every synthetic array.
pub const ITEMS_STATISTIC: &str = "avg_items";

/// Size configuration covering the synthetic schemas.
pub fn synthetic_config() -> SizeConfig {
    let types = TypeSizeTable::new()
        .with("integer", TypeSize::fixed(8.0))
        .with("string", TypeSize::fixed(80.0));
    SizeConfig::new(12.0, types)
}

/// Statistics covering the synthetic schemas.
pub fn synthetic_statistics(items: f64) -> StatisticsTable {
    StatisticsTable::new().with(ITEMS_STATISTIC, items)
}

/// A schema `depth` objects deep with `width` integer fields and one string
/// array per level.
pub fn synthetic_schema(width: usize, depth: usize) -> Schema {
    Schema::new(level(width, depth))
}

/// Number of field nodes in [`synthetic_schema`].
pub const fn synthetic_node_count(width: usize, depth: usize) -> usize {
    // width scalars, one array and one item node per level, plus the nested objects
    (width + 2) * (depth + 1) + depth
}

fn level(width: usize, depth: usize) -> Vec<Field> {
    let mut fields: Vec<Field> = (0..width)
        .map(|i| Field::new(format!("f{i}"), SchemaNode::scalar("integer")))
        .collect();
    fields.push(Field::new(
        "items",
        SchemaNode::array(SchemaNode::scalar("string"), ITEMS_STATISTIC),
    ));
    if depth > 0 {
        fields.push(Field::new("child", SchemaNode::object(level(width, depth - 1))));
    }
    fields
}

#[cfg(test)]
mod tests {
    use super::*;
    use docsize_lib::SizeEstimator;

    #[test]
    fn test_synthetic_schema_size() {
        let estimator = SizeEstimator::new(synthetic_config());
        let schema = synthetic_schema(2, 1);

        // Leaf level: 2 * 20 + (12 + 3 * 92) = 328; root adds the same plus 12 for "child".
        let size = estimator
            .document_size(&schema, &synthetic_statistics(3.0))
            .unwrap();
        assert_eq!(size, 2.0 * 328.0 + 12.0);
    }

    #[test]
    fn test_node_count() {
        assert_eq!(synthetic_node_count(2, 1), 9);
    }
}
