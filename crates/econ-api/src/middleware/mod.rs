//! API 서버용 HTTP middleware.

mod metrics;

pub use metrics::metrics_layer;
