use serde::{Deserialize, Serialize};

/// Product categories of the sales catalog
///
/// The catalog service owns the authoritative list; this enum mirrors it
/// for defaulting and display labels. Unknown codes coming from pasted
/// data are passed through to the server untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProductCategory {
    #[default]
    NonClasse,
    Buvable,
    ComboPacks,
    GestionDePoids,
    Nutrition,
    ProduitDeLaRoche,
    SoinsDeLaPeau,
    SoinsPersonnels,
}

impl ProductCategory {
    /// Wire code of the category
    pub fn code(&self) -> &'static str {
        match self {
            ProductCategory::NonClasse => "NON_CLASSE",
            ProductCategory::Buvable => "BUVABLE",
            ProductCategory::ComboPacks => "COMBO_PACKS",
            ProductCategory::GestionDePoids => "GESTION_DE_POIDS",
            ProductCategory::Nutrition => "NUTRITION",
            ProductCategory::ProduitDeLaRoche => "PRODUIT_DE_LA_ROCHE",
            ProductCategory::SoinsDeLaPeau => "SOINS_DE_LA_PEAU",
            ProductCategory::SoinsPersonnels => "SOINS_PERSONNELS",
        }
    }

    /// Human-readable label
    pub fn display_name(&self) -> &'static str {
        match self {
            ProductCategory::NonClasse => "Non classé",
            ProductCategory::Buvable => "Buvable",
            ProductCategory::ComboPacks => "Combo Packs",
            ProductCategory::GestionDePoids => "Gestion de poids",
            ProductCategory::Nutrition => "Nutrition",
            ProductCategory::ProduitDeLaRoche => "Produit de la ruche",
            ProductCategory::SoinsDeLaPeau => "Soins de la peau",
            ProductCategory::SoinsPersonnels => "Soins personnels",
        }
    }

    /// All known categories
    pub fn all() -> Vec<ProductCategory> {
        vec![
            ProductCategory::NonClasse,
            ProductCategory::Buvable,
            ProductCategory::ComboPacks,
            ProductCategory::GestionDePoids,
            ProductCategory::Nutrition,
            ProductCategory::ProduitDeLaRoche,
            ProductCategory::SoinsDeLaPeau,
            ProductCategory::SoinsPersonnels,
        ]
    }

    /// Parse from a wire code
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "NON_CLASSE" => Some(ProductCategory::NonClasse),
            "BUVABLE" => Some(ProductCategory::Buvable),
            "COMBO_PACKS" => Some(ProductCategory::ComboPacks),
            "GESTION_DE_POIDS" => Some(ProductCategory::GestionDePoids),
            "NUTRITION" => Some(ProductCategory::Nutrition),
            "PRODUIT_DE_LA_ROCHE" => Some(ProductCategory::ProduitDeLaRoche),
            "SOINS_DE_LA_PEAU" => Some(ProductCategory::SoinsDeLaPeau),
            "SOINS_PERSONNELS" => Some(ProductCategory::SoinsPersonnels),
            _ => None,
        }
    }
}

impl std::fmt::Display for ProductCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_round_trip() {
        for cat in ProductCategory::all() {
            assert_eq!(ProductCategory::from_code(cat.code()), Some(cat));
        }
    }

    #[test]
    fn test_unknown_code() {
        assert_eq!(ProductCategory::from_code("SAVON"), None);
        assert_eq!(ProductCategory::from_code(""), None);
    }

    #[test]
    fn test_default_is_non_classe() {
        assert_eq!(ProductCategory::default().code(), "NON_CLASSE");
    }

    #[test]
    fn test_serde_uses_wire_code() {
        let json = serde_json::to_string(&ProductCategory::GestionDePoids).unwrap();
        assert_eq!(json, "\"GESTION_DE_POIDS\"");
    }
}
