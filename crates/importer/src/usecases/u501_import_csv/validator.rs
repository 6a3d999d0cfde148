use super::normalizer::{NormalizedRow, StockCell};

/// Field names found defective for one row, in schema order.
/// Empty result ⇒ the row is submittable.
pub type ValidationResult = Vec<&'static str>;

// "Parseable as a number": parses and is not the NaN literal
fn is_numeric(s: &str) -> bool {
    !s.is_empty() && s.parse::<f64>().map(|v| !v.is_nan()).unwrap_or(false)
}

/// Full defect set for one row; every rule is checked, not just the
/// first hit. Advisory only: defective rows are flagged in the preview
/// but still submitted; the server rejects them row-by-row and reports
/// them back in the outcome.
pub fn validate(row: &NormalizedRow) -> ValidationResult {
    let mut defects = ValidationResult::new();

    if row.sku.is_empty() {
        defects.push("sku");
    }
    if row.nom.is_empty() {
        defects.push("nom");
    }
    if !row.prix_base_fcfa.is_finite() || row.prix_base_fcfa < 0.0 {
        defects.push("prixBaseFcfa");
    }
    if !is_numeric(&row.cc) {
        defects.push("cc");
    }
    if !is_numeric(&row.poids_kg) {
        defects.push("poidsKg");
    }
    // Unreachable after default substitution unless the schema default
    // itself is misconfigured
    if row.category.is_empty() {
        defects.push("category");
    }
    // Blank stock is always valid: it means "let the server choose"
    if let StockCell::Value { parsed, .. } = row.stock_qty {
        if !parsed.is_finite() || parsed < 0.0 || parsed.fract() != 0.0 {
            defects.push("stockQty");
        }
    }

    defects
}

pub fn is_valid(row: &NormalizedRow) -> bool {
    validate(row).is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_row() -> NormalizedRow {
        NormalizedRow {
            sku: "123-ABC".to_string(),
            nom: "Aloe Vera Gel".to_string(),
            prix_base_fcfa: 15000.0,
            cc: "0.482".to_string(),
            poids_kg: "3.300".to_string(),
            actif: true,
            image_url: String::new(),
            category: "NON_CLASSE".to_string(),
            stock_qty: StockCell::Unset,
            details: String::new(),
        }
    }

    #[test]
    fn test_valid_row_has_no_defects() {
        assert!(validate(&valid_row()).is_empty());
        assert!(is_valid(&valid_row()));
    }

    #[test]
    fn test_missing_sku() {
        let mut row = valid_row();
        row.sku = String::new();
        assert_eq!(validate(&row), vec!["sku"]);
    }

    #[test]
    fn test_negative_or_nan_price() {
        let mut row = valid_row();
        row.prix_base_fcfa = -100.0;
        assert_eq!(validate(&row), vec!["prixBaseFcfa"]);
        row.prix_base_fcfa = f64::NAN;
        assert_eq!(validate(&row), vec!["prixBaseFcfa"]);
    }

    #[test]
    fn test_empty_or_textual_cc_and_poids() {
        let mut row = valid_row();
        row.cc = String::new();
        row.poids_kg = "lourd".to_string();
        assert_eq!(validate(&row), vec!["cc", "poidsKg"]);
    }

    #[test]
    fn test_unset_stock_is_valid() {
        let row = valid_row();
        assert!(is_valid(&row));
    }

    #[test]
    fn test_stock_must_be_a_non_negative_integer() {
        let mut row = valid_row();
        row.stock_qty = StockCell::Value {
            raw: "2.5".to_string(),
            parsed: 2.5,
        };
        assert_eq!(validate(&row), vec!["stockQty"]);

        row.stock_qty = StockCell::Value {
            raw: "-3".to_string(),
            parsed: -3.0,
        };
        assert_eq!(validate(&row), vec!["stockQty"]);

        row.stock_qty = StockCell::Value {
            raw: "12".to_string(),
            parsed: 12.0,
        };
        assert!(is_valid(&row));
    }

    #[test]
    fn test_all_defects_are_reported_in_schema_order() {
        let row = NormalizedRow {
            sku: String::new(),
            nom: String::new(),
            prix_base_fcfa: f64::NAN,
            cc: String::new(),
            poids_kg: String::new(),
            actif: true,
            image_url: String::new(),
            category: String::new(),
            stock_qty: StockCell::Value {
                raw: "x".to_string(),
                parsed: f64::NAN,
            },
            details: String::new(),
        };
        assert_eq!(
            validate(&row),
            vec!["sku", "nom", "prixBaseFcfa", "cc", "poidsKg", "category", "stockQty"]
        );
    }

    #[test]
    fn test_unknown_category_code_is_left_to_the_server() {
        let mut row = valid_row();
        row.category = "SAVON".to_string();
        assert!(is_valid(&row));
    }
}
