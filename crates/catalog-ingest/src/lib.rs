//! Catalog ingestion: the external input collaborator.
//!
//! One asynchronous, one-shot operation obtains the raw item collection
//! (remote HTTP endpoint or a local JSON payload file). Failures are
//! reported once and not retried; the pipeline downstream treats a
//! failed retrieval exactly like an empty catalog.

pub mod error;
pub mod file;
pub mod remote;

pub use error::{IngestError, Result};
pub use file::load_products_file;
pub use remote::{DEFAULT_BASE_URL, RemoteSource};
