pub mod api;
pub mod scripts;

pub use api::{ApiClient, ApiConfigError, DEFAULT_API_ROOT, normalize_api_root};
pub use scripts::{ScriptError, ScriptProcessor};
