mod valkyrie_config;

pub use valkyrie_config::{CmrConfig, DateWindowConfig, OrderConfig, ValkyrieConfig};
