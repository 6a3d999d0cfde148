use super::normalizer::{self, NormalizedRow};
use super::parser;
use super::validator;

/// Rows shown in the preview sample
pub const PREVIEW_ROWS: usize = 5;

/// Full normalized batch for one paste cycle plus derived aggregates.
///
/// Rebuilt from scratch on every text edit: pure synchronous
/// computation, no incremental diffing, no memoization. Discarded when
/// the text is cleared.
#[derive(Debug, Clone, Default)]
pub struct BatchPreview {
    rows: Vec<NormalizedRow>,
    invalid_count: usize,
}

impl BatchPreview {
    pub fn from_text(text: &str) -> Self {
        let table = parser::parse(text);
        let rows: Vec<NormalizedRow> = table.rows.iter().map(normalizer::normalize).collect();
        let invalid_count = rows.iter().filter(|r| !validator::is_valid(r)).count();
        Self {
            rows,
            invalid_count,
        }
    }

    /// The whole ordered batch, defective rows included
    pub fn rows(&self) -> &[NormalizedRow] {
        &self.rows
    }

    pub fn total(&self) -> usize {
        self.rows.len()
    }

    /// Live counter for UI affordance. Never gates submission of a
    /// non-empty batch; the empty batch itself is the only hard gate.
    pub fn invalid_count(&self) -> usize {
        self.invalid_count
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// First rows of the batch, in input order. A head sample rather
    /// than an invalid-rows sample, so the operator can spot a wrong
    /// delimiter or misordered columns at a glance.
    pub fn preview_rows(&self) -> &[NormalizedRow] {
        &self.rows[..self.rows.len().min(PREVIEW_ROWS)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecases::u501_import_csv::validator::validate;

    #[test]
    fn test_two_row_scenario() {
        let text = "sku;nom;prixBaseFcfa;cc;poidsKg;actif;imageUrl\n\
                    123-ABC;Aloe Vera Gel;15000;0.482;3.300;true;https://x/y.jpg\n\
                    ;Missing Sku;9000;0.100;1.000;;\n";
        let batch = BatchPreview::from_text(text);

        assert_eq!(batch.total(), 2);
        assert_eq!(batch.invalid_count(), 1);

        let rows = batch.rows();
        assert!(rows[0].actif);
        assert!(validate(&rows[0]).is_empty());
        // Blank actif defaults to active even on the defective row
        assert!(rows[1].actif);
        assert_eq!(validate(&rows[1]), vec!["sku"]);
    }

    #[test]
    fn test_invalid_rows_stay_in_the_batch() {
        let text = "sku,nom,prixBaseFcfa,cc,poidsKg\n\
                    A,Aloe,1000,0.1,0.5\n\
                    B,Miel,2000,0.2,0.7\n\
                    C,Savon,3000,0.3,0.2\n\
                    ,Sans sku 1,4000,0.4,0.1\n\
                    ,Sans sku 2,5000,0.5,0.9\n";
        let batch = BatchPreview::from_text(text);
        assert_eq!(batch.total(), 5);
        assert_eq!(batch.invalid_count(), 2);
    }

    #[test]
    fn test_preview_is_first_five_of_the_full_batch() {
        let mut text = String::from("sku;nom;prixBaseFcfa;cc;poidsKg\n");
        for i in 0..8 {
            text.push_str(&format!("SKU-{i};Produit {i};1000;0.1;0.5\n"));
        }
        let batch = BatchPreview::from_text(&text);
        assert_eq!(batch.total(), 8);
        assert_eq!(batch.preview_rows().len(), PREVIEW_ROWS);
        assert_eq!(batch.preview_rows()[0].sku, "SKU-0");
        assert_eq!(batch.preview_rows()[4].sku, "SKU-4");
    }

    #[test]
    fn test_small_batch_preview_is_whole_batch() {
        let batch = BatchPreview::from_text("sku;nom;prixBaseFcfa;cc;poidsKg\nA;Aloe;1;0.1;0.5\n");
        assert_eq!(batch.preview_rows().len(), 1);
    }

    #[test]
    fn test_empty_text_is_inert() {
        let batch = BatchPreview::from_text("");
        assert!(batch.is_empty());
        assert_eq!(batch.invalid_count(), 0);
        assert!(batch.preview_rows().is_empty());
    }

    #[test]
    fn test_header_only_is_inert() {
        let batch = BatchPreview::from_text("sku;nom;prixBaseFcfa;cc;poidsKg\n");
        assert!(batch.is_empty());
    }
}
