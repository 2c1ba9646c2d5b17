//! Unified configuration layer.
//!
//! Every environment read goes through here; callers use the structured configs.
//!
//! - `loader`: env_or, env_optional, env_bool, env_list, `.env` loading
//! - `schema`: PackConfig, PathsConfig, ObservabilityConfig
//! - `env_keys`: key constants

pub mod env_keys;
pub mod loader;
pub mod schema;

pub use loader::{env_bool, env_list, env_optional, env_or, load_dotenv};
pub use schema::{
    ObservabilityConfig, PackConfig, PathsConfig, DEFAULT_OUTPUT_DIR, DEFAULT_SKILLS,
};
