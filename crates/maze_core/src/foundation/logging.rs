//! Logging utilities and structured logging support

pub use log::{debug, error, info, trace, warn};

/// Initialize the logging system
///
/// Hosts call this once at startup. Safe to call again (tests and
/// embedding hosts may race to it); later calls keep the first logger.
pub fn init() {
    let _ = env_logger::try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_is_safe_to_call_twice() {
        init();
        init();
        info!("logging ready");
    }
}
