//! One-time process bootstrap.
//!
//! Runs from the shell constructor, before the first dispatch. Neither step
//! is retried; a failure surfaces as a failed shell construction and the
//! host decides what to show.

use spanview_client_core::{ApiClient, ApiConfigError, DEFAULT_API_ROOT, ScriptError,
    ScriptProcessor};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BootstrapError {
    #[error("api root assignment failed: {0}")]
    ApiRoot(#[from] ApiConfigError),
    #[error("configuration scripts failed: {0}")]
    Scripts(#[from] ScriptError),
}

/// Assigns the default API root, then hands control to the operator script
/// processor. The order is load-bearing: scripts may build request URLs
/// against the configured root.
pub fn run_bootstrap(
    api: &mut ApiClient,
    scripts: &mut dyn ScriptProcessor,
) -> Result<(), BootstrapError> {
    api.set_api_root(DEFAULT_API_ROOT)?;
    scripts.process_scripts()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FailingScripts;

    impl ScriptProcessor for FailingScripts {
        fn process_scripts(&mut self) -> Result<(), ScriptError> {
            Err(ScriptError::Discovery("no config document".to_string()))
        }
    }

    #[derive(Default)]
    struct RecordingScripts {
        calls: u32,
    }

    impl ScriptProcessor for RecordingScripts {
        fn process_scripts(&mut self) -> Result<(), ScriptError> {
            self.calls += 1;
            Ok(())
        }
    }

    #[test]
    fn assigns_default_api_root_and_invokes_scripts_once() {
        let mut api = ApiClient::new();
        let mut scripts = RecordingScripts::default();
        run_bootstrap(&mut api, &mut scripts).expect("bootstrap succeeds");
        assert_eq!(api.api_root(), Some("/api/"));
        assert_eq!(scripts.calls, 1);
    }

    #[test]
    fn script_failure_propagates_after_root_assignment() {
        let mut api = ApiClient::new();
        let error = run_bootstrap(&mut api, &mut FailingScripts).expect_err("scripts fail");
        assert!(matches!(error, BootstrapError::Scripts(_)));
        // The root was assigned even though step 2 aborted the bootstrap.
        assert!(api.is_configured());
    }
}
