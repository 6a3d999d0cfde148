use anyhow::Context;
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u501_import_csv::ImportCsv;

use importer::shared::config;
use importer::shared::format::{fmt_decimal3, format_fcfa, format_number, or_dash};
use importer::usecases::u501_import_csv::catalog_client::CatalogClient;
use importer::usecases::u501_import_csv::normalizer::StockCell;
use importer::usecases::u501_import_csv::validator;
use importer::usecases::u501_import_csv::{ImportSession, SubmitResult};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let log_dir = std::path::Path::new("target").join("logs");
    std::fs::create_dir_all(&log_dir)?;
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_dir.join("importer.log"))?;

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::sync::Arc::new(log_file))
                .with_ansi(false),
        )
        .init();

    tracing::info!("{}: {}", ImportCsv::full_name(), ImportCsv::display_name());

    let mut apply = false;
    let mut path: Option<String> = None;
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--apply" => apply = true,
            other => path = Some(other.to_string()),
        }
    }

    let Some(path) = path else {
        eprintln!("Usage: importer <fichier.csv | -> [--apply]");
        eprintln!("Colonnes reconnues : sku, nom, prixBaseFcfa, cc, poidsKg, actif, imageUrl, category, stockQty, details");
        eprintln!("Séparateur accepté : ; ou ,");
        std::process::exit(2);
    };

    let text = if path == "-" {
        use std::io::Read;
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        std::fs::read_to_string(&path).with_context(|| format!("lecture de {}", path))?
    };

    let mut session = ImportSession::new();
    session.set_text(&text)?;

    print_preview(&session);

    if !apply {
        println!();
        println!("Aperçu seul — relancer avec --apply pour importer.");
        return Ok(());
    }

    if session.batch().is_empty() {
        println!();
        println!("Aucune ligne à importer.");
        return Ok(());
    }

    let config = config::load_config()?;
    let catalog = CatalogClient::from_config(&config);

    // The server upserts by SKU: re-running the same file converges
    // instead of duplicating. Invalid rows go along and come back in the
    // error count.
    match session.submit(&catalog).await? {
        SubmitResult::Succeeded(outcome) => {
            println!();
            println!(
                "✅ Import terminé — Créés: {}, Mis à jour: {}, Erreurs: {}",
                outcome.created,
                outcome.updated,
                outcome.error_count()
            );
        }
        SubmitResult::Failed(message) => {
            println!();
            println!("Import échoué : {}", message);
            std::process::exit(1);
        }
    }

    Ok(())
}

/// First-five head sample, like the admin console modal: a wrong
/// delimiter or misordered columns shows up in the first lines.
fn print_preview(session: &ImportSession) {
    let batch = session.batch();
    println!(
        "Lignes: {} • Invalides: {}",
        format_number(batch.total() as u64),
        format_number(batch.invalid_count() as u64)
    );
    println!();
    println!(
        "{:<12} {:<24} {:>14} {:>8} {:>8} {:<6} {:<6}",
        "SKU", "Nom", "Prix", "CC", "Kg", "Actif", "Stock"
    );
    for row in batch.preview_rows() {
        let defects = validator::validate(row);
        let note = if defects.is_empty() {
            String::new()
        } else {
            format!(" (invalide: {})", defects.join(","))
        };
        let prix = if row.prix_base_fcfa.is_finite() {
            format_fcfa(row.prix_base_fcfa)
        } else {
            "—".to_string()
        };
        println!(
            "{:<12} {:<24} {:>14} {:>8} {:>8} {:<6} {:<6}{}",
            or_dash(&row.sku),
            or_dash(&row.nom),
            prix,
            or_dash(&fmt_decimal3(&row.cc)),
            or_dash(&fmt_decimal3(&row.poids_kg)),
            row.actif,
            stock_display(&row.stock_qty),
            note
        );
    }
}

fn stock_display(stock: &StockCell) -> String {
    match stock {
        StockCell::Unset => "—".to_string(),
        StockCell::Value { raw, .. } => raw.clone(),
    }
}
