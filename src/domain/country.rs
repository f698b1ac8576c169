//! Country reference data.

use serde::{Deserialize, Serialize};

/// A country, identified by its ISO-style code (e.g. "UY").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    pub name: String,
    pub code: String,
}

impl Country {
    pub fn new(name: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            code: code.into(),
        }
    }
}
