use std::io;

use crate::error::ObdError;

/// Whole-buffer LZMA pass over the fully assembled artifact.
pub(crate) fn compress(data: &[u8]) -> Result<Vec<u8>, ObdError> {
    let mut compressed = Vec::new();
    lzma_rs::lzma_compress(&mut io::Cursor::new(data), &mut compressed)?;

    Ok(compressed)
}

#[cfg(test)]
pub(crate) fn decompress(data: &[u8]) -> Vec<u8> {
    let mut decompressed = Vec::new();
    lzma_rs::lzma_decompress(&mut io::Cursor::new(data), &mut decompressed).unwrap();

    decompressed
}
