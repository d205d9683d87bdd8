//! Configuration: compiled defaults, TOML files, and `LOTTO_*` environment overrides.

pub mod defaults;
pub mod generation_config;
pub mod learning_config;
pub mod model_config;
pub mod uniqueness_config;

pub use generation_config::GenerationConfig;
pub use learning_config::LearningConfig;
pub use model_config::ModelConfig;
pub use uniqueness_config::UniquenessConfig;
