//! Terminal presentation shared by the chat session and the subcommands.

use anyhow::Result;
use inquire::InquireError;

mod spinner;
mod theme;

pub use spinner::Spinner;
pub use theme::Style;

/// Ctrl+C and Escape at an `inquire` prompt.
pub const fn is_prompt_cancelled(err: &InquireError) -> bool {
    matches!(
        err,
        InquireError::OperationCanceled | InquireError::OperationInterrupted
    )
}

/// Runs an interactive step; a cancelled prompt yields `Ok(None)`.
///
/// On cancellation the cursor is moved past the abandoned prompt line.
pub fn unless_cancelled<T>(step: impl FnOnce() -> Result<T>) -> Result<Option<T>> {
    match step() {
        Ok(value) => Ok(Some(value)),
        Err(e)
            if e.downcast_ref::<InquireError>()
                .is_some_and(is_prompt_cancelled) =>
        {
            println!();
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completed_step_returns_value() {
        let saved = unless_cancelled(|| Ok("hi".to_string()));
        assert_eq!(saved.ok().flatten().as_deref(), Some("hi"));
    }

    #[test]
    fn test_cancelled_prompt_is_not_an_error() {
        for cancelled in [
            InquireError::OperationCanceled,
            InquireError::OperationInterrupted,
        ] {
            let result = unless_cancelled::<()>(|| Err(cancelled.into()));
            assert!(matches!(result, Ok(None)));
        }
    }

    #[test]
    fn test_other_errors_propagate() {
        let result = unless_cancelled::<()>(|| Err(anyhow::anyhow!("config dir not writable")));
        let Err(err) = result else {
            panic!("expected an error");
        };
        assert!(err.to_string().contains("config dir not writable"));

        let not_cancelled = InquireError::Custom("validator failed".into());
        assert!(!is_prompt_cancelled(&not_cancelled));
    }
}
