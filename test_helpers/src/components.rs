//! Sample components covering every mutator kind and the lifecycle hooks.

use std::any::Any;
use std::fmt;

use paramwire::{
    BoxError, Component, Configurable, Initializable, ProblemHandler, TextMap, must_not_be_empty,
};

/// Capability shared by the sample fetchers.
pub trait Fetcher: Any + fmt::Debug + Send + Sync {
    /// One-line description of the fetcher's configuration.
    fn describe(&self) -> String;

    /// Nested fetchers, for composites.
    fn children(&self) -> &[Box<dyn Fetcher>] {
        &[]
    }
}

/// Capability no fetcher provides.
pub trait Emitter: fmt::Debug + Send + Sync {
    /// Name of the emitter's sink.
    fn sink(&self) -> &str;
}

/// Reads from the local filesystem. Exposes one field of every value kind.
#[derive(Clone, Debug, Default, PartialEq, Configurable)]
pub struct FileFetcher {
    /// Directory fetched from.
    pub base_path: String,
    /// Whether fetched bytes are spooled to a temporary file.
    pub spool_to_temp: bool,
    /// Upper bound on bytes read.
    pub max_bytes: i64,
    /// Number of retries.
    pub retries: i32,
    /// Timeout in seconds.
    pub timeout_seconds: f64,
    /// Multiplier applied between retries.
    pub backoff: f32,
    /// File extensions considered, in priority order.
    pub extensions: Vec<String>,
    /// Extra metadata attached to fetched items.
    pub metadata: TextMap,
    /// Optional label.
    pub label: Option<String>,
}

impl Component for FileFetcher {}

impl Fetcher for FileFetcher {
    fn describe(&self) -> String {
        format!("file:{}", self.base_path)
    }
}

/// Fetches from a remote bucket. Requires `bucket` and `region`.
#[derive(Clone, Debug, Default, PartialEq, Configurable)]
pub struct BucketFetcher {
    /// Bucket name.
    pub bucket: String,
    /// Region the bucket lives in.
    pub region: String,
    /// Optional credentials profile.
    pub profile: Option<String>,
    /// Set by initialization.
    #[configurable(skip)]
    pub connected: bool,
}

impl Component for BucketFetcher {
    fn as_initializable(&mut self) -> Option<&mut dyn Initializable> {
        Some(self)
    }
}

impl Initializable for BucketFetcher {
    fn initialize(&mut self, _params: &TextMap) -> Result<(), BoxError> {
        if self.region.eq_ignore_ascii_case("nowhere") {
            return Err(format!("unknown region '{}'", self.region).into());
        }
        self.connected = true;
        Ok(())
    }

    fn check_initialization(&self, handler: ProblemHandler) -> Result<(), BoxError> {
        for (name, value) in [("bucket", &self.bucket), ("region", &self.region)] {
            if let Err(problem) = must_not_be_empty(name, Some(value.as_str())) {
                handler.handle(self.component_name(), problem.to_string())?;
            }
        }
        Ok(())
    }
}

impl Fetcher for BucketFetcher {
    fn describe(&self) -> String {
        format!("bucket:{}@{}", self.bucket, self.region)
    }
}

/// Tries each wrapped fetcher in order.
#[derive(Debug, Configurable)]
pub struct CompositeFetcher {
    /// Wrapped fetchers, in document order.
    #[configurable(skip)]
    pub fetchers: Vec<Box<dyn Fetcher>>,
    /// Name reported by [`Fetcher::describe`].
    pub name: String,
    /// Stop at the first fetcher that succeeds.
    pub stop_on_first: bool,
}

impl CompositeFetcher {
    /// Wraps `fetchers`.
    #[must_use]
    pub fn new(fetchers: Vec<Box<dyn Fetcher>>) -> Self {
        Self {
            fetchers,
            name: "composite".to_owned(),
            stop_on_first: false,
        }
    }
}

impl Component for CompositeFetcher {}

impl Fetcher for CompositeFetcher {
    fn describe(&self) -> String {
        let inner: Vec<String> = self.fetchers.iter().map(|fetcher| fetcher.describe()).collect();
        format!("{}[{}]", self.name, inner.join(","))
    }

    fn children(&self) -> &[Box<dyn Fetcher>] {
        &self.fetchers
    }
}

/// Emitter that discards everything.
#[derive(Debug, Default, Configurable)]
pub struct NullEmitter {
    /// Sink name.
    pub sink: String,
}

impl Component for NullEmitter {}

impl Emitter for NullEmitter {
    fn sink(&self) -> &str {
        &self.sink
    }
}
