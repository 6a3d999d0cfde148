use serde::{Deserialize, Serialize};

/// Request to the catalog upsert endpoint
///
/// The whole batch goes out as a single request; the server upserts each
/// row by `sku` and reports per-row rejections in the response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportRequest {
    pub rows: Vec<ProductRow>,
}

/// One serialized product row, final nullability rules already applied
///
/// `prix_base_fcfa` and `stock_qty` are nullable on the wire: JSON has no
/// NaN, so a non-finite normalized value is sent as null and left for the
/// server to reject.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductRow {
    pub sku: String,

    pub nom: String,

    #[serde(rename = "prixBaseFcfa")]
    pub prix_base_fcfa: Option<f64>,

    /// Case credits, fixed 3-decimal string convention
    pub cc: String,

    #[serde(rename = "poidsKg")]
    pub poids_kg: String,

    pub actif: bool,

    #[serde(rename = "imageUrl")]
    pub image_url: Option<String>,

    pub category: String,

    pub details: Option<String>,

    #[serde(rename = "stockQty")]
    pub stock_qty: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_camel_case_and_nulls() {
        let row = ProductRow {
            sku: "123-ABC".to_string(),
            nom: "Aloe Vera Gel".to_string(),
            prix_base_fcfa: Some(15000.0),
            cc: "0.482".to_string(),
            poids_kg: "3.300".to_string(),
            actif: true,
            image_url: None,
            category: "NON_CLASSE".to_string(),
            details: None,
            stock_qty: Some(0.0),
        };
        let json = serde_json::to_value(&row).unwrap();
        assert_eq!(json["prixBaseFcfa"], 15000.0);
        assert_eq!(json["poidsKg"], "3.300");
        assert!(json["imageUrl"].is_null());
        assert!(json["details"].is_null());
        assert_eq!(json["stockQty"], 0.0);
    }

    #[test]
    fn test_unparseable_price_is_null_on_the_wire() {
        let row = ProductRow {
            sku: "X".to_string(),
            nom: "Y".to_string(),
            prix_base_fcfa: None,
            cc: "".to_string(),
            poids_kg: "".to_string(),
            actif: true,
            image_url: None,
            category: "NON_CLASSE".to_string(),
            details: None,
            stock_qty: None,
        };
        let json = serde_json::to_value(&row).unwrap();
        assert!(json["prixBaseFcfa"].is_null());
        assert!(json["stockQty"].is_null());
    }
}
