use contracts::domain::a001_product::ProductCategory;
use once_cell::sync::Lazy;
use std::collections::HashSet;

use super::parser::RawRecord;

/// Tokens accepted as an explicit "active" value
static TRUTHY_TOKENS: Lazy<HashSet<&'static str>> =
    Lazy::new(|| ["1", "true", "oui", "yes", "y"].into_iter().collect());

/// Stock cell: blank means "let the server choose the default",
/// kept distinct from an explicit 0 until submission time.
#[derive(Debug, Clone, PartialEq)]
pub enum StockCell {
    Unset,
    Value {
        /// Cell text as typed, for display
        raw: String,
        /// Parsed number, NaN when the text is not numeric
        parsed: f64,
    },
}

impl StockCell {
    pub fn is_unset(&self) -> bool {
        matches!(self, StockCell::Unset)
    }
}

/// One raw record coerced into the product field schema.
///
/// The field set is always the full schema, whatever headers were pasted:
/// absent columns normalize to their blank/default state. Defects are not
/// represented here; they live in the validator's side-channel list, so
/// the preview can render something for every row, garbage included.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedRow {
    pub sku: String,
    pub nom: String,
    /// NaN when the cell was blank or not numeric
    pub prix_base_fcfa: f64,
    pub cc: String,
    pub poids_kg: String,
    pub actif: bool,
    /// Empty means "no image"; resolved to null at submit time
    pub image_url: String,
    pub category: String,
    pub stock_qty: StockCell,
    /// Empty resolved to null at submit time, like image_url
    pub details: String,
}

fn cell(raw: &RawRecord, key: &str) -> String {
    raw.get(key).map(|v| v.trim().to_string()).unwrap_or_default()
}

/// Coerce one raw record into the schema. Total: never fails, every
/// record produces some row, possibly one full of defaults.
pub fn normalize(raw: &RawRecord) -> NormalizedRow {
    // Blank defaults to active so an export can omit the column entirely;
    // any unrecognized non-blank token means inactive.
    let actif_raw = cell(raw, "actif").to_lowercase();
    let actif = actif_raw.is_empty() || TRUTHY_TOKENS.contains(actif_raw.as_str());

    let prix_raw = cell(raw, "prixBaseFcfa");
    let prix_base_fcfa = if prix_raw.is_empty() {
        f64::NAN
    } else {
        prix_raw.parse().unwrap_or(f64::NAN)
    };

    let category_raw = cell(raw, "category");
    let category = if category_raw.is_empty() {
        ProductCategory::default().code().to_string()
    } else {
        category_raw
    };

    let stock_raw = cell(raw, "stockQty");
    let stock_qty = if stock_raw.is_empty() {
        StockCell::Unset
    } else {
        let parsed = stock_raw.parse().unwrap_or(f64::NAN);
        StockCell::Value {
            raw: stock_raw,
            parsed,
        }
    };

    NormalizedRow {
        sku: cell(raw, "sku"),
        nom: cell(raw, "nom"),
        prix_base_fcfa,
        cc: cell(raw, "cc"),
        poids_kg: cell(raw, "poidsKg"),
        actif,
        image_url: cell(raw, "imageUrl"),
        category,
        stock_qty,
        details: cell(raw, "details"),
    }
}
