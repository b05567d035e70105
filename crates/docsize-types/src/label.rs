//! Entity labels guessed from field names.

use serde::{Deserialize, Serialize};

/// Semantic label of a document or embedded object.
///
/// Labels only annotate reports; they never influence a size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum EntityLabel {
    /// A catalog product.
    Product,
    /// A product category.
    Category,
    /// A product supplier.
    Supplier,
    /// Stock of one product in one warehouse.
    Stock,
    /// A customer.
    Client,
    /// One line of an order.
    OrderLine,
    /// A warehouse.
    Warehouse,
    /// No distinguishing fields matched.
    #[default]
    Unknown,
}

/// Distinguishing field sets, checked in order; the first full match wins.
const RULES: &[(&[&str], EntityLabel)] = &[
    (&["IDP", "price"], EntityLabel::Product),
    (&["title"], EntityLabel::Category),
    (&["IDS", "SIRET"], EntityLabel::Supplier),
    (&["location", "quantity"], EntityLabel::Stock),
    (&["IDC", "email"], EntityLabel::Client),
    (&["date", "deliveryDate"], EntityLabel::OrderLine),
    (&["IDW", "capacity"], EntityLabel::Warehouse),
];

impl EntityLabel {
    /// Detects the label from a set of field names.
    ///
    /// Field names are compared exactly.
    #[must_use]
    pub fn detect<'a, I>(field_names: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let names: Vec<&str> = field_names.into_iter().collect();
        RULES
            .iter()
            .find(|(required, _)| required.iter().all(|field| names.contains(field)))
            .map_or(Self::Unknown, |(_, label)| *label)
    }

    /// Returns true unless this is [`EntityLabel::Unknown`].
    #[must_use]
    pub const fn is_known(&self) -> bool {
        !matches!(self, Self::Unknown)
    }

    /// Returns the label as a string slice.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Product => "Product",
            Self::Category => "Category",
            Self::Supplier => "Supplier",
            Self::Stock => "Stock",
            Self::Client => "Client",
            Self::OrderLine => "OrderLine",
            Self::Warehouse => "Warehouse",
            Self::Unknown => "Unknown",
        }
    }

    /// Returns the short form used in design signatures (e.g. "Prod").
    #[must_use]
    pub const fn abbreviation(&self) -> &'static str {
        match self {
            Self::Product => "Prod",
            Self::Category => "Cat",
            Self::Supplier => "Supp",
            Self::Stock => "St",
            Self::Client => "Cl",
            Self::OrderLine => "OL",
            Self::Warehouse => "Wa",
            Self::Unknown => "?",
        }
    }
}

impl std::fmt::Display for EntityLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
