/// Receives informational messages about rejected requests.
///
/// Rejections are expected outcomes, so implementations should record them at an
/// informational level. Implementations are shared across threads.
pub trait CorsLogger: Send + Sync {
    fn info(&self, message: &str);
}

/// Discards every message. Used when no logger is injected.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopLogger;

impl CorsLogger for NoopLogger {
    fn info(&self, _message: &str) {}
}

/// Forwards messages to `tracing` at `INFO` level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl CorsLogger for TracingLogger {
    fn info(&self, message: &str) {
        tracing::info!(target: "cors_engine", "{message}");
    }
}

impl<F> CorsLogger for F
where
    F: Fn(&str) + Send + Sync,
{
    fn info(&self, message: &str) {
        self(message)
    }
}
