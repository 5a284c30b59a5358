use serde::{Deserialize, Serialize};

use super::defaults;

/// Where the school dataset lives.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    pub schools_path: String,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            schools_path: defaults::DEFAULT_SCHOOLS_PATH.to_string(),
        }
    }
}
