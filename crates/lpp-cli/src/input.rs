//! Reading frames and manifests from files or stdin.

use std::fs;
use std::io::{self, Read as _, Write as _};
use std::path::Path;

use anyhow::{Context, Result};

fn is_stdio(path: &Path) -> bool {
    path.as_os_str() == "-"
}

/// Read all of `path`, or stdin when `path` is `-`.
pub fn read_all(path: &Path) -> Result<Vec<u8>> {
    if is_stdio(path) {
        let mut buf = Vec::new();
        io::stdin()
            .lock()
            .read_to_end(&mut buf)
            .context("cannot read stdin")?;
        return Ok(buf);
    }
    fs::read(path).with_context(|| format!("cannot read {}", path.display()))
}

/// Read a frame, decoding hex text first when `hex` is set.
///
/// Hex input may contain whitespace (line breaks, grouping spaces).
pub fn read_frame(path: &Path, hex: bool) -> Result<Vec<u8>> {
    let bytes = read_all(path)?;
    if !hex {
        return Ok(bytes);
    }
    let text: String = String::from_utf8_lossy(&bytes)
        .chars()
        .filter(|c| !c.is_ascii_whitespace())
        .collect();
    hex::decode(&text).with_context(|| format!("invalid hex in {}", path.display()))
}

/// Write `bytes` to `path`, or stdout when `path` is `-`.
pub fn write_all(path: &Path, bytes: &[u8]) -> Result<()> {
    if is_stdio(path) {
        let mut out = io::stdout().lock();
        out.write_all(bytes).context("cannot write stdout")?;
        return out.flush().context("cannot write stdout");
    }
    fs::write(path, bytes).with_context(|| format!("cannot write {}", path.display()))
}
