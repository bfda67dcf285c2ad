//! CLI command implementations.

pub mod build;
pub mod registry;
pub mod zero;

// Re-export submodules for convenience
pub use build::BuildArgs;
pub use registry::RegistryArgs;
pub use zero::ZeroArgs;

use tenor_core::types::Date;

use crate::error::{CliError, CliResult};

/// Parses a date string in YYYY-MM-DD format.
pub fn parse_date(s: &str) -> CliResult<Date> {
    Date::parse(s).map_err(|_| CliError::InvalidDate(s.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date() {
        assert_eq!(parse_date("2025-03-13").unwrap(), Date::from_ymd(2025, 3, 13).unwrap());
        assert!(matches!(parse_date("13/03/2025"), Err(CliError::InvalidDate(_))));
    }
}
