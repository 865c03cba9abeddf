// src/exit.rs
//! Standardized process exit codes for `tokcount`.
//!
//! Provides a stable contract for scripts and automation.

use crate::error::TallyError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum TallyExit {
    /// The count was printed.
    Success = 0,
    /// Generic error (missing file, permissions, tokenizer unavailable).
    Error = 1,
    /// The input file is not UTF-8 or not JSON.
    InvalidInput = 2,
}

impl TallyExit {
    #[must_use]
    pub fn code(self) -> i32 {
        self as i32
    }

    /// Picks the exit code for a failed run.
    #[must_use]
    pub fn for_error(err: &anyhow::Error) -> Self {
        match err.downcast_ref::<TallyError>() {
            Some(e) if e.is_invalid_input() => Self::InvalidInput,
            _ => Self::Error,
        }
    }

    pub fn exit(self) -> ! {
        std::process::exit(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_codes_distinct() {
        assert_eq!(TallyExit::Success.code(), 0);
        assert_ne!(TallyExit::Error.code(), TallyExit::InvalidInput.code());
    }

    #[test]
    fn test_json_error_is_invalid_input() {
        let source = serde_json::from_str::<serde_json::Value>("[").unwrap_err();
        let err = anyhow::Error::new(TallyError::Json {
            source,
            path: PathBuf::from("a.json"),
        });
        assert_eq!(TallyExit::for_error(&err), TallyExit::InvalidInput);
    }

    #[test]
    fn test_io_error_is_generic() {
        let err = anyhow::Error::new(TallyError::Io {
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
            path: PathBuf::from("missing.json"),
        });
        assert_eq!(TallyExit::for_error(&err), TallyExit::Error);
    }
}
