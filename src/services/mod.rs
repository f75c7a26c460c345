//! Service Layer
//!
//! I/O the page depends on: loading the catalog document from its configured
//! source, and the tokio bridge the HTTP client runs on.
//!
//! ```text
//! LandingState::load_catalog
//!       │
//!       ▼
//! load_catalog(source) ── Bundled ─▶ rust-embed asset
//!       │              ── Path ────▶ std::fs
//!       │              ── Url ─────▶ run_in_tokio(reqwest GET)
//!       ▼
//! Result<Catalog> applied on the UI thread
//! ```

mod catalog_source;
mod runtime;

pub use catalog_source::*;
pub use runtime::*;
