//! Exit code constants for the promptgen CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, unreadable input, config problems)
//! - 2: Validation failure (requirement or prompt mapping rejected)
//! - 3: Enhancement failure (hosted model call failed)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, unreadable input file, or invalid config.
pub const USER_ERROR: i32 = 1;

/// Validation failure: a requirement or prompt mapping failed its checks.
pub const VALIDATION_FAILURE: i32 = 2;

/// Enhancement failure: the hosted model call did not produce a result.
pub const ENHANCE_FAILURE: i32 = 3;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_are_distinct() {
        let codes = [SUCCESS, USER_ERROR, VALIDATION_FAILURE, ENHANCE_FAILURE];
        for (i, &a) in codes.iter().enumerate() {
            for (j, &b) in codes.iter().enumerate() {
                if i != j {
                    assert_ne!(a, b, "Exit codes must be distinct");
                }
            }
        }
    }

    #[test]
    fn success_is_zero() {
        assert_eq!(SUCCESS, 0);
    }
}
