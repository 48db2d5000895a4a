//! Error types for dial-watch core.

use thiserror::Error;

/// Failure modes of a single probe cycle.
///
/// These never escape the prober's public API: `Prober::probe` collapses
/// every variant to a not-detected classification. They exist so the
/// collapse happens at one visible boundary instead of being scattered
/// through the cycle.
#[derive(Debug, Error)]
pub enum ProbeError {
    /// No response arrived before the receive deadline. Expected on any
    /// network without the target service; not a fault.
    #[error("no response within the receive deadline")]
    Timeout,

    /// Socket creation, send, or receive failed.
    #[error("socket error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, ProbeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_probe_error_display() {
        let err = ProbeError::Timeout;
        assert_eq!(
            format!("{}", err),
            "no response within the receive deadline"
        );
    }

    #[test]
    fn test_probe_error_from_io() {
        let io = std::io::Error::new(std::io::ErrorKind::AddrInUse, "in use");
        let err: ProbeError = io.into();
        assert!(format!("{}", err).contains("socket error"));
    }
}
