pub mod generate;
pub mod init;

pub use generate::{handle_generate, GenerateConfig};
pub use init::{init_config, DEFAULT_CONFIG};
