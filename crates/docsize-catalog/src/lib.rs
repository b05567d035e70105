//! Coursework catalog for the docsize calculator.
//!
//! This crate embeds the statistics, size constants, schema designs DB1 to
//! DB5 and sharding scenarios of the e-commerce case study, so the
//! calculator can be run without writing any input files.
//!
//! # Example
//!
//! ```
//! use docsize_catalog::Catalog;
//!
//! let catalog = Catalog::global();
//!
//! // Lookup by name (case-insensitive)
//! if let Some(design) = catalog.design("db2") {
//!     println!("{}: {}", design.name, design.signature);
//! }
//! ```

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/docsize/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

use std::collections::BTreeMap;
use std::sync::OnceLock;

use docsize_types::{
    CollectionSpec, DatabaseDesign, DocsizeError, DocumentCount, Schema, ShardingCase,
    SizeConfig, StatisticsTable,
};
use serde::Deserialize;
use serde_json::{Map, Value};

/// The catalog JSON embedded at compile time.
const CATALOG_JSON: &str = include_str!("../data/catalog.json");

/// Global catalog instance.
static CATALOG: OnceLock<Catalog> = OnceLock::new();

/// Raw JSON structure for deserialization.
#[derive(Debug, Deserialize)]
struct RawCatalog {
    size_config: SizeConfig,
    statistics: StatisticsTable,
    reference_design: String,
    schemas: Map<String, Value>,
    designs: Vec<RawDesign>,
    sharding: Vec<ShardingCase>,
}

/// Raw design whose collections refer to schemas by name.
#[derive(Debug, Deserialize)]
struct RawDesign {
    name: String,
    signature: String,
    collections: Vec<RawCollection>,
}

#[derive(Debug, Deserialize)]
struct RawCollection {
    name: String,
    schema: String,
    count: DocumentCount,
}

/// Read-only registry of the case study inputs.
#[derive(Debug, Clone)]
pub struct Catalog {
    size_config: SizeConfig,
    statistics: StatisticsTable,
    schemas: BTreeMap<String, Schema>,
    designs: Vec<DatabaseDesign>,
    reference: usize,
    sharding: Vec<ShardingCase>,
}

impl Catalog {
    /// Returns the global catalog.
    ///
    /// The catalog is parsed lazily from the embedded JSON on first access.
    #[must_use]
    pub fn global() -> &'static Self {
        CATALOG.get_or_init(|| {
            Self::from_json(CATALOG_JSON).expect("embedded catalog.json should be valid")
        })
    }

    /// Parses a catalog from JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is invalid, a schema is malformed, a
    /// design refers to an unknown schema or the reference design is
    /// missing.
    pub fn from_json(json: &str) -> Result<Self, DocsizeError> {
        let raw: RawCatalog = serde_json::from_str(json)?;

        let schemas = raw
            .schemas
            .iter()
            .map(|(name, value)| Ok((name.clone(), Schema::from_value(value)?)))
            .collect::<Result<BTreeMap<_, _>, DocsizeError>>()?;

        let designs = raw
            .designs
            .into_iter()
            .map(|design| {
                let collections = design
                    .collections
                    .into_iter()
                    .map(|c| {
                        let schema = schemas
                            .get(&c.schema)
                            .cloned()
                            .ok_or_else(|| DocsizeError::UnknownSchema(c.schema.clone()))?;
                        Ok(CollectionSpec::new(c.name, schema, c.count))
                    })
                    .collect::<Result<Vec<_>, DocsizeError>>()?;
                Ok(DatabaseDesign::new(design.name, design.signature, collections))
            })
            .collect::<Result<Vec<_>, DocsizeError>>()?;

        let reference = designs
            .iter()
            .position(|d| d.name.eq_ignore_ascii_case(&raw.reference_design))
            .ok_or(DocsizeError::UnknownDesign(raw.reference_design))?;

        Ok(Self {
            size_config: raw.size_config,
            statistics: raw.statistics,
            schemas,
            designs,
            reference,
            sharding: raw.sharding,
        })
    }

    /// Returns the default size configuration.
    #[must_use]
    pub const fn size_config(&self) -> &SizeConfig {
        &self.size_config
    }

    /// Returns the case study statistics.
    #[must_use]
    pub const fn statistics(&self) -> &StatisticsTable {
        &self.statistics
    }

    /// Returns all designs in catalog order.
    #[must_use]
    pub fn designs(&self) -> &[DatabaseDesign] {
        &self.designs
    }

    /// Looks up a design by name (case-insensitive).
    #[must_use]
    pub fn design(&self, name: &str) -> Option<&DatabaseDesign> {
        self.designs.iter().find(|d| d.name.eq_ignore_ascii_case(name))
    }

    /// Returns the normalized design that sharding cases are evaluated on.
    #[must_use]
    pub fn reference_design(&self) -> &DatabaseDesign {
        &self.designs[self.reference]
    }

    /// Looks up a named schema.
    #[must_use]
    pub fn schema(&self, name: &str) -> Option<&Schema> {
        self.schemas.get(name)
    }

    /// Returns the sharding scenarios.
    #[must_use]
    pub fn sharding_cases(&self) -> &[ShardingCase] {
        &self.sharding
    }

    /// Returns the number of servers in the cluster, if the statistics name one.
    #[must_use]
    pub fn servers(&self) -> Option<f64> {
        self.statistics.get("servers").ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use docsize_types::EntityLabel;

    #[test]
    fn test_global_catalog_loads() {
        let catalog = Catalog::global();

        assert_eq!(catalog.designs().len(), 5);
        assert_eq!(catalog.sharding_cases().len(), 6);
        assert_eq!(catalog.reference_design().name, "DB1");
        assert_eq!(catalog.servers(), Some(1000.0));
        assert_eq!(catalog.size_config().key_overhead, 12.0);
    }

    #[test]
    fn test_design_lookup() {
        let catalog = Catalog::global();

        let db3 = catalog.design("db3").expect("DB3 should exist");
        assert_eq!(db3.signature, "St{Prod{[Cat],Supp}}, Wa, OL, Cl");
        assert_eq!(db3.collections.len(), 4);
        assert_eq!(db3.collection("Stock").unwrap().label(), EntityLabel::Stock);
        assert!(catalog.design("DB9").is_none());
    }

    #[test]
    fn test_schema_labels() {
        let catalog = Catalog::global();
        let expected = [
            ("product", EntityLabel::Product),
            ("stock", EntityLabel::Stock),
            ("orderline", EntityLabel::OrderLine),
            ("client", EntityLabel::Client),
            ("warehouse", EntityLabel::Warehouse),
        ];

        for (name, label) in expected {
            assert_eq!(catalog.schema(name).unwrap().label(), label, "{name}");
        }
    }

    #[test]
    fn test_unknown_schema_reference() {
        let json = r#"{
            "size_config": { "key_overhead": 1, "types": {} },
            "statistics": {},
            "reference_design": "A",
            "schemas": {},
            "designs": [
                { "name": "A", "signature": "X", "collections": [
                    { "name": "X", "schema": "missing", "count": 1 }
                ] }
            ],
            "sharding": []
        }"#;

        assert!(matches!(
            Catalog::from_json(json),
            Err(DocsizeError::UnknownSchema(name)) if name == "missing"
        ));
    }

    /// Top-level entries of a signature, with their embedded parts removed.
    fn signature_roots(signature: &str) -> Vec<&str> {
        let mut roots = Vec::new();
        let mut depth = 0usize;
        let mut start = 0;
        for (i, c) in signature.char_indices() {
            match c {
                '{' | '[' => depth += 1,
                '}' | ']' => depth -= 1,
                ',' if depth == 0 => {
                    roots.push(&signature[start..i]);
                    start = i + 1;
                }
                _ => {}
            }
        }
        roots.push(&signature[start..]);
        roots
            .into_iter()
            .map(|root| root.trim().split('{').next().unwrap_or_default())
            .collect()
    }

    #[test]
    fn test_signatures_name_collection_labels() {
        for design in Catalog::global().designs() {
            let labels: Vec<_> = design
                .collections
                .iter()
                .map(|c| c.label().abbreviation())
                .collect();
            assert_eq!(signature_roots(&design.signature), labels, "{}", design.name);
        }
    }

    #[test]
    fn test_missing_reference_design() {
        let json = r#"{
            "size_config": { "key_overhead": 1, "types": {} },
            "statistics": {},
            "reference_design": "DB1",
            "schemas": {},
            "designs": [],
            "sharding": []
        }"#;

        assert!(matches!(
            Catalog::from_json(json),
            Err(DocsizeError::UnknownDesign(name)) if name == "DB1"
        ));
    }
}
