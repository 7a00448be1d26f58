//! Test helpers shared across crates.
//!
//! This crate provides a small family of sample components built around the
//! [`components::Fetcher`] capability, a registry preloaded with them, and
//! document fixtures that can be written to temporary files.

pub mod components;
pub mod documents;
pub mod registry;

pub use components::{BucketFetcher, CompositeFetcher, Emitter, FileFetcher, Fetcher, NullEmitter};
pub use documents::{DocumentFile, write_document};
pub use registry::sample_registry;
