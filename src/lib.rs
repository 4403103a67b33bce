pub mod error;
pub mod stream;
pub mod lazy_stream;

pub mod stream_configuration;
pub mod stream_performance_metrics;

// Re-export the stream type and its traits at the crate root
pub use lazy_stream::*;
pub use error::{StreamError, StreamResult};
pub use stream::{Cursor, Source};
pub use stream_configuration::MetricsConfig;
pub use stream_performance_metrics::{MetricsHandle, StreamMetrics};
