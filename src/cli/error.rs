// Error handling utilities for consistent error messages and exit codes

use std::process;

/// Exit with a user error (exit code 1)
/// User errors are for invalid input, missing resources, etc.
pub fn user_error(message: &str) -> ! {
    eprintln!("Error: {}", message);
    process::exit(1);
}

/// Exit with an internal error (exit code >1)
/// Internal errors are for unexpected system failures, unreadable boards, etc.
pub fn internal_error(message: &str) -> ! {
    eprintln!("Internal error: {}", message);
    process::exit(2);
}

/// Validate a watch interval (whole seconds, at least 1)
pub fn validate_interval(secs: u64) -> Result<u64, String> {
    if secs == 0 {
        Err("Interval must be at least 1 second".to_string())
    } else {
        Ok(secs)
    }
}

/// Validate a team filter value (non-empty after trimming)
pub fn validate_team(value: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        Err("Team filter cannot be empty".to_string())
    } else {
        Ok(())
    }
}
