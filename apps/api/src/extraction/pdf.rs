use std::panic::{self, AssertUnwindSafe};

use super::FormatError;

/// Extracts the text layer of a PDF held in memory.
///
/// `pdf-extract` panics on some structurally broken files (missing page boxes,
/// undefined fonts); those surface as `FormatError::Pdf` like any parse failure.
pub(super) fn read_text(bytes: &[u8]) -> Result<String, FormatError> {
    match panic::catch_unwind(AssertUnwindSafe(|| pdf_extract::extract_text_from_mem(bytes))) {
        Ok(result) => result.map_err(|e| FormatError::Pdf(e.to_string())),
        Err(_) => Err(FormatError::Pdf("malformed PDF".to_string())),
    }
}
