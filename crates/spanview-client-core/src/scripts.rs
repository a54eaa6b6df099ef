//! Operator configuration scripts.
//!
//! Deployments can ship customization scripts alongside the shell; the shell
//! only promises to invoke the processor exactly once during bootstrap,
//! after the API root is assigned. Discovery, sandboxing, and execution are
//! the processor's business.

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScriptError {
    #[error("script discovery failed: {0}")]
    Discovery(String),
    #[error("script injection failed for {url:?}: {reason}")]
    Injection { url: String, reason: String },
}

pub trait ScriptProcessor {
    /// Discovers and executes operator-supplied configuration scripts. A
    /// failure aborts shell construction; the shell never retries.
    fn process_scripts(&mut self) -> Result<(), ScriptError>;
}
