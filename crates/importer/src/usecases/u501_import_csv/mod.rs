pub mod catalog_client;
pub mod coordinator;
pub mod normalizer;
pub mod parser;
pub mod preview;
pub mod validator;

pub use coordinator::{ImportSession, SubmitError, SubmitPhase, SubmitResult};
pub use preview::BatchPreview;
