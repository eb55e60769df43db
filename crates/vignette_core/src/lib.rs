//! Core data types for the Vignette video pipeline.
//!
//! This crate provides the foundation data types shared across the Vignette
//! workspace: media kinds and assets, and the composition spec handed to the
//! video encoder.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod media;
mod spec;

pub use media::{MediaAsset, MediaKind};
pub use spec::{CompositionSpec, CompositionSpecBuilder};
