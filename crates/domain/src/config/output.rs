use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct OutputConfig {
    /// Wrap `+` lines in green and `-` lines in red
    #[serde(default)]
    pub color: bool,
}
