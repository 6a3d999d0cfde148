pub mod request;
pub mod response;

pub use request::{ImportRequest, ProductRow};
pub use response::{ImportOutcome, RowError};

use crate::usecases::common::UseCaseMetadata;

pub struct ImportCsv;

impl UseCaseMetadata for ImportCsv {
    fn usecase_index() -> &'static str {
        "u501"
    }

    fn usecase_name() -> &'static str {
        "import_csv"
    }

    fn display_name() -> &'static str {
        "Import CSV produits"
    }

    fn description() -> &'static str {
        "Import en masse de produits depuis un texte délimité, upsert par SKU"
    }
}
