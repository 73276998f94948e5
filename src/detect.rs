use crate::error::FelixError;
use crate::options::BinaryDetection;
use std::fs::File;
use std::io::Read;
use std::path::Path;
#[cfg(feature = "logging")]
use tracing;
fn read_prefix(path: &Path, prefix_len: usize) -> Result<Vec<u8>, FelixError> {
    let file = File::open(path).map_err(|e| FelixError::io(path, e))?;
    let mut prefix = Vec::with_capacity(prefix_len);
    file.take(prefix_len as u64)
        .read_to_end(&mut prefix)
        .map_err(|e| FelixError::io(path, e))?;
    Ok(prefix)
}
/// Classifies an already-read prefix.
pub fn classify(prefix: &[u8], detection: BinaryDetection) -> bool {
    match detection {
        BinaryDetection::Simple => prefix.contains(&0),
        BinaryDetection::Accurate => content_inspector::inspect(prefix).is_binary(),
        BinaryDetection::None => false,
    }
}
/// Reads up to `prefix_len` bytes of `path` and reports whether the file looks binary.
///
/// A file that cannot be opened or read counts as binary.
pub fn is_binary(path: &Path, detection: BinaryDetection, prefix_len: usize) -> bool {
    if detection == BinaryDetection::None {
        return false;
    }
    match read_prefix(path, prefix_len) {
        Ok(prefix) => classify(&prefix, detection),
        Err(_e) => {
            #[cfg(feature = "logging")]
            tracing::debug!("Treating unreadable file as binary: {}", _e);
            true
        }
    }
}
