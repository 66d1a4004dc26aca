//! Request headers file loading.

use std::collections::BTreeMap;
use std::path::Path;

use crate::error::SetupError;

/// Load the header-name -> value map from a JSON file.
///
/// An empty file means no headers. Anything but a flat object of strings is
/// rejected.
pub fn load_headers(path: &Path) -> Result<BTreeMap<String, String>, SetupError> {
    let data = std::fs::read(path).map_err(|source| SetupError::HeadersUnreadable {
        path: path.to_path_buf(),
        source,
    })?;

    if data.iter().all(u8::is_ascii_whitespace) {
        return Ok(BTreeMap::new());
    }

    serde_json::from_slice(&data).map_err(|e| {
        SetupError::HeadersMalformed(format!("{}: {}", path.display(), e))
    })
}
