//! Declarative header resolution.
//!
//! Source spreadsheets label the same field many ways (`Model Name`,
//! `Material name`, `QTY`, `Quantity on hand`, ...). Each canonical field
//! carries an ordered list of match rules, kept as data so the synonym sets
//! are testable in isolation. Resolution binds each field to the first
//! matching header in left-to-right order; a bound header is removed from
//! consideration for later fields.

use std::collections::BTreeMap;

use crate::csv_table::CsvTable;
use crate::error::{IngestError, Result};

/// Canonical field names shared by the rule tables and the typed loaders.
pub mod field {
    pub const MODEL: &str = "model";
    pub const QTY: &str = "qty";
    pub const TOTAL_COST: &str = "total_cost";
    pub const SECONDARY_PRICE: &str = "secondary_price";
    pub const LIST_PRICE: &str = "list_price";
}

/// A single case-insensitive header predicate.
#[derive(Debug, Clone, Copy)]
pub enum MatchRule {
    /// Header equals the token (ignoring case and surrounding whitespace).
    Exact(&'static str),
    /// Header contains the token.
    Contains(&'static str),
    /// Header contains every token.
    AllOf(&'static [&'static str]),
}

impl MatchRule {
    fn matches(&self, header: &str) -> bool {
        let lowered = header.trim().to_lowercase();
        match self {
            Self::Exact(token) => lowered == *token,
            Self::Contains(token) => lowered.contains(token),
            Self::AllOf(tokens) => tokens.iter().all(|token| lowered.contains(token)),
        }
    }
}

/// One canonical field with its ordered match rules.
#[derive(Debug, Clone, Copy)]
pub struct FieldRule {
    pub field: &'static str,
    pub rules: &'static [MatchRule],
}

/// Rule table for the inventory/cost source.
pub const INVENTORY_FIELDS: &[FieldRule] = &[
    FieldRule {
        field: field::MODEL,
        rules: &[
            MatchRule::AllOf(&["model", "name"]),
            MatchRule::Exact("name"),
            MatchRule::AllOf(&["material", "name"]),
        ],
    },
    FieldRule {
        field: field::QTY,
        rules: &[MatchRule::Contains("qty"), MatchRule::Contains("quantity")],
    },
    FieldRule {
        field: field::TOTAL_COST,
        rules: &[MatchRule::AllOf(&["total", "cost"])],
    },
];

/// Rule table for the secondary (1.27) price source.
pub const SECONDARY_FIELDS: &[FieldRule] = &[
    FieldRule {
        field: field::MODEL,
        rules: &[
            MatchRule::AllOf(&["model", "name"]),
            MatchRule::Exact("name"),
            MatchRule::AllOf(&["material", "name"]),
        ],
    },
    FieldRule {
        field: field::SECONDARY_PRICE,
        rules: &[
            MatchRule::Contains("1.27"),
            MatchRule::AllOf(&["july", "price"]),
        ],
    },
];

/// Rule table for the master list-price source.
pub const LIST_FIELDS: &[FieldRule] = &[
    FieldRule {
        field: field::MODEL,
        rules: &[
            MatchRule::AllOf(&["model", "name"]),
            MatchRule::Exact("name"),
            MatchRule::AllOf(&["material", "name"]),
        ],
    },
    FieldRule {
        field: field::LIST_PRICE,
        rules: &[
            MatchRule::AllOf(&["list", "price"]),
            MatchRule::Exact("listprice"),
        ],
    },
];

/// Resolved mapping from canonical field name to header column index for one
/// table. Built once per table and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct HeaderMap(BTreeMap<&'static str, usize>);

impl HeaderMap {
    /// Returns the column index supplying `field`, when the field was part
    /// of the rule table this map was resolved from.
    pub fn column(&self, field: &'static str) -> Option<usize> {
        self.0.get(field).copied()
    }
}

/// Resolves a table's observed headers against a rule table.
///
/// Fields are processed in rule-table order; for each field, headers are
/// scanned left to right and the first header any rule matches is bound.
/// A field with no matching header is fatal: without it the table is
/// unusable.
pub fn resolve_headers(table: &CsvTable, spec: &[FieldRule]) -> Result<HeaderMap> {
    let mut bound: BTreeMap<&'static str, usize> = BTreeMap::new();
    let mut taken = vec![false; table.headers.len()];

    for field_rule in spec {
        let matched = table
            .headers
            .iter()
            .enumerate()
            .filter(|(idx, _)| !taken[*idx])
            .find(|(_, header)| field_rule.rules.iter().any(|rule| rule.matches(header)));
        match matched {
            Some((idx, _)) => {
                taken[idx] = true;
                bound.insert(field_rule.field, idx);
            }
            None => {
                return Err(IngestError::MissingColumn {
                    table: table.name.clone(),
                    field: field_rule.field,
                    observed: table.headers.clone(),
                });
            }
        }
    }
    Ok(HeaderMap(bound))
}
