use std::path::Path;

use anyhow::{ensure, Context, Result};

/// Read a raw UVM binary, dropping `skip` leading bytes and keeping at most
/// `len` of the rest. Both bounds must lie inside the file.
pub fn load_raw_bin(path: &Path, skip: usize, len: Option<usize>) -> Result<Vec<u8>> {
    let mut bytes = std::fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    ensure!(
        skip <= bytes.len(),
        "--skip {skip} exceeds file size {}",
        bytes.len()
    );
    bytes.drain(..skip);
    if let Some(len) = len {
        ensure!(
            len <= bytes.len(),
            "--len {len} exceeds the {} bytes left after --skip",
            bytes.len()
        );
        bytes.truncate(len);
    }
    Ok(bytes)
}
