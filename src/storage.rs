
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

pub fn load_file(path: &Path) -> Result<Vec<u8>> {
    let data = fs::read(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    Ok(data)
}

// overwrites any existing file at the path
pub fn save_file(path: &Path, data: &[u8]) -> Result<()> {
    fs::write(path, data)
        .with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}
