use std::fmt;

/// Startup stage that failed before the render loop could begin.
///
/// Attached as context to the underlying error, so callers can recover it
/// with `anyhow::Error::downcast_ref::<StartupError>()`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum StartupError {
    /// The OS window (or the event loop backing it) could not be created.
    Window,
    /// The window exists but no graphics context could be created for it.
    Gpu,
}

impl fmt::Display for StartupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StartupError::Window => f.write_str("failed to create window"),
            StartupError::Gpu => f.write_str("failed to create graphics context"),
        }
    }
}

impl std::error::Error for StartupError {}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;

    fn failing() -> Result<(), std::io::Error> {
        Err(std::io::Error::other("no display"))
    }

    #[test]
    fn recoverable_from_context() {
        let err = failing().context(StartupError::Window).unwrap_err();
        assert_eq!(err.downcast_ref::<StartupError>(), Some(&StartupError::Window));
        assert_eq!(format!("{err:#}"), "failed to create window: no display");
    }

    #[test]
    fn recoverable_under_outer_context() {
        let err = failing()
            .context(StartupError::Gpu)
            .context("runtime start")
            .unwrap_err();
        assert_eq!(err.downcast_ref::<StartupError>(), Some(&StartupError::Gpu));
    }

    #[test]
    fn absent_for_unrelated_errors() {
        let err = failing().context("something else").unwrap_err();
        assert!(err.downcast_ref::<StartupError>().is_none());
    }
}
