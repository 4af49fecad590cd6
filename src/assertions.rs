//! # Assertion Utility
//!
//! Asserts that an action fails with a message containing an expected
//! fragment. Matching is a case-insensitive substring match so tests survive
//! small wording changes in program errors. The flip side: a fragment shared
//! by several error kinds will pass for any of them, so pick fragments that
//! identify the error you mean.

use std::{fmt::Display, future::Future};

use crate::error::{HarnessError, HarnessResult};

fn message_matches(actual: &str, expected: &str) -> bool {
    actual.to_lowercase().contains(&expected.to_lowercase())
}

/// Check an already-computed result
///
/// # Errors
/// * `MissingFailure` - `result` is `Ok`
/// * `UnexpectedError` - the error message does not contain `expected`
pub fn assert_error_contains<T, E: Display>(result: Result<T, E>, expected: &str) -> HarnessResult<()> {
    match result {
        Ok(_) => Err(HarnessError::MissingFailure),
        Err(err) => {
            let actual = err.to_string();
            if message_matches(&actual, expected) {
                Ok(())
            } else {
                Err(HarnessError::UnexpectedError {
                    actual,
                    expected: expected.to_string(),
                })
            }
        }
    }
}

/// Run `action` and require it to fail with a message containing `expected`.
///
/// A panic inside `action` is not caught and propagates unchanged.
pub async fn expect_failure<F, Fut, T, E>(action: F, expected: &str) -> HarnessResult<()>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: Display,
{
    assert_error_contains(action().await, expected)
}
