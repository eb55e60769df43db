//! Media providers, fetching, and fallback for the Vignette video pipeline.
//!
//! Two independent provider clients share one retrieval contract: search a
//! keyword, take exactly the first result, download the binary, persist it
//! atomically. The [`FallbackResolver`] wraps that contract and substitutes
//! a bundled default asset when anything fails, so a transient provider
//! outage degrades the output instead of aborting the run.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod fallback;
mod fetcher;
mod jamendo;
mod unsplash;

pub use fallback::{FallbackResolver, FetchOutcome};
pub use fetcher::{MediaFetcher, write_atomic};
pub use jamendo::JamendoSearch;
pub use unsplash::UnsplashSearch;
