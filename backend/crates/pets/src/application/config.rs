//! Application Configuration
//!
//! Configuration for the pets application layer.

/// Pets application configuration
#[derive(Debug, Clone)]
pub struct PetsConfig {
    /// Value of the `input` query parameter that restricts listing to
    /// living pets
    pub alive_filter_keyword: String,
}

impl Default for PetsConfig {
    fn default() -> Self {
        Self {
            alive_filter_keyword: "alive".to_string(),
        }
    }
}
