use contracts::usecases::u501_import_csv::{ImportRequest, ImportOutcome, ProductRow};
use thiserror::Error;
use uuid::Uuid;

use super::catalog_client::CatalogApi;
use super::normalizer::{NormalizedRow, StockCell};
use super::preview::BatchPreview;

/// Submission lifecycle of one pipeline instance.
/// Invariant: at most one submission in flight per session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitPhase {
    Idle,
    Submitting,
}

/// Persistent banner state after a submission attempt. The session holds
/// `Option<SubmitResult>`: `None` means nothing was attempted yet, so
/// "zero errors because nothing ran" can never be confused with "zero
/// errors because everything succeeded".
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitResult {
    /// The service responded; counts are surfaced verbatim. Row-level
    /// rejections live inside the outcome, which is still a success.
    Succeeded(ImportOutcome),

    /// Transport or HTTP failure: nothing is known about what the server
    /// did. Recovery is a manual re-submit.
    Failed(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SubmitError {
    #[error("un import est déjà en cours")]
    Busy,

    #[error("le lot est vide")]
    EmptyBatch,
}

/// One import pipeline instance: the pasted text, the batch derived from
/// it, and the single in-flight-submission guard. No cross-instance
/// sharing.
pub struct ImportSession {
    raw_text: String,
    batch: BatchPreview,
    phase: SubmitPhase,
    last_result: Option<SubmitResult>,
}

impl Default for ImportSession {
    fn default() -> Self {
        Self::new()
    }
}

impl ImportSession {
    pub fn new() -> Self {
        Self {
            raw_text: String::new(),
            batch: BatchPreview::default(),
            phase: SubmitPhase::Idle,
            last_result: None,
        }
    }

    /// Replace the pasted text and rebuild the whole batch from scratch.
    /// Refused while a submission is in flight so the batch cannot change
    /// underneath the request.
    pub fn set_text(&mut self, text: &str) -> Result<(), SubmitError> {
        self.guard_idle()?;
        self.raw_text = text.to_string();
        self.batch = BatchPreview::from_text(text);
        Ok(())
    }

    /// Drop the text and the derived batch. The result banner survives a
    /// clear; it only resets on the next submission.
    pub fn clear(&mut self) -> Result<(), SubmitError> {
        self.guard_idle()?;
        self.raw_text.clear();
        self.batch = BatchPreview::default();
        Ok(())
    }

    pub fn raw_text(&self) -> &str {
        &self.raw_text
    }

    pub fn batch(&self) -> &BatchPreview {
        &self.batch
    }

    pub fn phase(&self) -> SubmitPhase {
        self.phase
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == SubmitPhase::Submitting
    }

    pub fn last_result(&self) -> Option<&SubmitResult> {
        self.last_result.as_ref()
    }

    fn guard_idle(&self) -> Result<(), SubmitError> {
        if self.phase == SubmitPhase::Submitting {
            return Err(SubmitError::Busy);
        }
        Ok(())
    }

    /// Idle → Submitting. Enforces the re-entrance guard and the one hard
    /// local gate: the batch must not be empty.
    fn begin_submission(&mut self) -> Result<(), SubmitError> {
        self.guard_idle()?;
        if self.batch.is_empty() {
            return Err(SubmitError::EmptyBatch);
        }
        self.phase = SubmitPhase::Submitting;
        self.last_result = None;
        Ok(())
    }

    /// Submitting → Idle, recording the banner state
    fn finish_submission(&mut self, result: SubmitResult) {
        self.last_result = Some(result);
        self.phase = SubmitPhase::Idle;
    }

    /// Serialize and send the full batch, defective rows included (the
    /// server rejects those individually), then reconcile the outcome.
    /// No automatic retry on failure: the batch may be partially
    /// committed and a blind retry would double-process rows that
    /// already succeeded. Retry is a manual operator action.
    pub async fn submit(&mut self, catalog: &dyn CatalogApi) -> Result<SubmitResult, SubmitError> {
        self.begin_submission()?;

        let session_id = Uuid::new_v4();
        let request = ImportRequest {
            rows: self.batch.rows().iter().map(to_product_row).collect(),
        };
        tracing::info!(
            "Import session {}: submitting {} rows ({} flagged invalid)",
            session_id,
            request.rows.len(),
            self.batch.invalid_count()
        );

        let result = match catalog.upsert_batch(&request).await {
            Ok(outcome) => {
                tracing::info!(
                    "Import session {}: created {}, updated {}, {} row errors",
                    session_id,
                    outcome.created,
                    outcome.updated,
                    outcome.error_count()
                );
                SubmitResult::Succeeded(outcome)
            }
            Err(e) => {
                tracing::error!("Import session {}: {}", session_id, e);
                SubmitResult::Failed(e.to_string())
            }
        };

        self.finish_submission(result.clone());
        Ok(result)
    }
}

/// Final nullability rules, applied only here so the preview keeps the
/// blank/zero distinction until the last moment: empty imageUrl and
/// details become null, an unset stock collapses to 0, and non-finite
/// numbers go out as null (JSON has no NaN).
fn to_product_row(row: &NormalizedRow) -> ProductRow {
    ProductRow {
        sku: row.sku.clone(),
        nom: row.nom.clone(),
        prix_base_fcfa: if row.prix_base_fcfa.is_finite() {
            Some(row.prix_base_fcfa)
        } else {
            None
        },
        cc: row.cc.clone(),
        poids_kg: row.poids_kg.clone(),
        actif: row.actif,
        image_url: if row.image_url.is_empty() {
            None
        } else {
            Some(row.image_url.clone())
        },
        category: row.category.clone(),
        details: if row.details.is_empty() {
            None
        } else {
            Some(row.details.clone())
        },
        stock_qty: match &row.stock_qty {
            StockCell::Unset => Some(0.0),
            StockCell::Value { parsed, .. } => {
                if parsed.is_finite() {
                    Some(*parsed)
                } else {
                    None
                }
            }
        },
    }
}
