//! Deterministic display colors for client names.
//!
//! The color is `#` followed by the first six hex characters of the BLAKE3
//! digest of the UTF-8 client name, i.e. a 24-bit RGB value. Distinct
//! clients may share a color; identical clients always do.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of hex digits kept from the digest (24 bits).
const RGB_HEX_LEN: usize = 6;

/// A `#rrggbb` display color.
///
/// Only [`color_for`] produces non-empty values. Deserialized values are
/// replaced on load, so the persisted field is informational.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColorCode(String);

impl ColorCode {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ColorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Map a client name to its display color.
#[must_use]
pub fn color_for(client: &str) -> ColorCode {
    let digest = blake3::hash(client.as_bytes()).to_hex().to_string();
    ColorCode(format!("#{}", &digest[..RGB_HEX_LEN]))
}
