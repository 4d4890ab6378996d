//! Service configuration: types, loading and validation.

mod loader;
mod types;
mod validator;

pub use loader::{apply_env, from_file, from_json_str, load, CONFIG_PATH_ENV, DEFAULT_CONFIG_PATH};
pub use types::{AppConfig, DbConfig, ServerConfig};
pub use validator::validate;
