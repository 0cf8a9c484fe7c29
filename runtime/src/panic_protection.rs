// SPDX-FileCopyrightText: 2024 TriliTech <contact@trili.tech>
//
// SPDX-License-Identifier: MIT

use std::any::Any;
use std::panic::{catch_unwind, AssertUnwindSafe};

use crate::error::InputError;

/// Try to turn a panic payload into a string.
#[inline]
fn panic_payload_to_string(payload: &dyn Any) -> &str {
    if let Some(message) = payload.downcast_ref::<String>() {
        message.as_str()
    } else if let Some(message) = payload.downcast_ref::<&str>() {
        message
    } else {
        "<unknown>"
    }
}

/// Run application code, turning a panic into an [`InputError::ApplicationFault`].
///
/// The closure may leave the environment half-updated when it unwinds.
/// That state is kept, as it would be for an error returned after the same
/// operations.
pub fn catch_fault<F, T>(go: F) -> Result<T, InputError>
where
    F: FnOnce() -> T,
{
    catch_unwind(AssertUnwindSafe(go)).map_err(|error| {
        InputError::ApplicationFault(panic_payload_to_string(&*error).to_owned())
    })
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_value_passes_through() {
        assert_eq!(catch_fault(|| 42).unwrap(), 42);
    }

    #[test]
    fn test_panic_messages() {
        let error = catch_fault(|| panic!("input not accepted")).unwrap_err();
        assert_eq!(error.to_string(), "A panic occurred: input not accepted");

        let code = 7;
        let error = catch_fault(|| panic!("code {code}")).unwrap_err();
        assert_eq!(error.to_string(), "A panic occurred: code 7");

        let error = catch_fault(|| std::panic::panic_any(3u8)).unwrap_err();
        assert_eq!(error.to_string(), "A panic occurred: <unknown>");
    }
}
