use atelier_core::{AppError, AppResult};
use tracing_subscriber::EnvFilter;

/// Installs the global tracing subscriber.
///
/// The filter comes from `RUST_LOG` and falls back to `info`. Fails when a
/// global subscriber is already installed.
pub fn init_tracing() -> AppResult<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .try_init()
        .map_err(|error| AppError::Internal(format!("failed to initialize tracing: {error}")))
}

#[cfg(test)]
mod tests {
    use super::init_tracing;

    #[test]
    fn second_initialization_is_rejected() {
        // The first call may lose to another test in this binary.
        let _ = init_tracing();
        assert!(init_tracing().is_err());
    }
}
