//! Device identifier normalization.
//!
//! SDL database lines start with a 32-character GUID string. On the legacy
//! layout that matters here, the USB vendor id sits at characters `8..12` and
//! the product id at `16..20`, each stored little-endian (low byte first). The
//! canonical key re-emits both in natural byte order:
//!
//! ```text
//! 03000000 5e04 0000 8e02 000014010000
//!          ^^^^      ^^^^
//!          04 5e     02 8e   →  "045e:028e"
//! ```
//!
//! # Example
//! ```
//! use padtable::normalize_identifier;
//!
//! let key = normalize_identifier("030000005e0400008e02000014010000").unwrap();
//! assert_eq!(key, "045e:028e");
//! ```

use crate::error::IdentError;

/// Character range holding the little-endian vendor id.
const VENDOR: (usize, usize) = (8, 12);

/// Character range holding the little-endian product id.
const PRODUCT: (usize, usize) = (16, 20);

/// Identifier field value that marks a platform-default entry rather than a device.
pub const PLATFORM_DEFAULT_ID: &str = "xinput";

/// Builds the canonical `vvvv:pppp` key for a device identifier.
///
/// Offsets count characters, not bytes. Only the fixed offsets are read; the
/// characters are not checked to be hex. The result is lower-cased.
pub fn normalize_identifier(ident: &str) -> Result<String, IdentError> {
    let vendor = swap_pair(ident, VENDOR)?;
    let product = swap_pair(ident, PRODUCT)?;
    Ok(format!("{vendor}:{product}").to_lowercase())
}

/// Returns the characters at `start..end` with the two leading and two trailing swapped.
fn swap_pair(ident: &str, (start, end): (usize, usize)) -> Result<String, IdentError> {
    let field: Vec<char> = ident.chars().skip(start).take(end - start).collect();
    if field.len() < end - start {
        return Err(IdentError::TooShort(ident.to_string()));
    }
    let (low, high) = field.split_at(2);
    Ok(high.iter().chain(low).collect())
}
