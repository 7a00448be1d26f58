//! A registry preloaded with the sample components.

use paramwire::ComponentRegistry;

use crate::components::{BucketFetcher, CompositeFetcher, Emitter, FileFetcher, Fetcher, NullEmitter};

/// Class identifier whose factory always fails.
pub const BROKEN_CLASS: &str = "demo.BrokenFetcher";

/// Returns a registry holding every sample component.
///
/// | Class | Provides |
/// |-------|----------|
/// | `demo.FileFetcher` | `dyn Fetcher` |
/// | `demo.BucketFetcher` | `dyn Fetcher` |
/// | `demo.CompositeFetcher` | `dyn Fetcher`, composite of `dyn Fetcher` |
/// | `demo.NullEmitter` | `dyn Emitter` |
/// | `demo.BrokenFetcher` | `dyn Fetcher`, factory fails |
#[must_use]
pub fn sample_registry() -> ComponentRegistry {
    let mut registry = ComponentRegistry::new();
    registry
        .register::<FileFetcher>("demo.FileFetcher")
        .provides::<dyn Fetcher, _>(|fetcher| fetcher);
    registry
        .register::<BucketFetcher>("demo.BucketFetcher")
        .provides::<dyn Fetcher, _>(|fetcher| fetcher);
    registry
        .declare::<CompositeFetcher>("demo.CompositeFetcher")
        .provides::<dyn Fetcher, _>(|fetcher| fetcher)
        .composite_of::<dyn Fetcher, _>(CompositeFetcher::new);
    registry
        .register::<NullEmitter>("demo.NullEmitter")
        .provides::<dyn Emitter, _>(|emitter| emitter);
    registry
        .register_with::<FileFetcher, _>(BROKEN_CLASS, || Err("disk unavailable".into()))
        .provides::<dyn Fetcher, _>(|fetcher| fetcher);
    registry
}
