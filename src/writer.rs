use std::{
    fs::File,
    io::{BufWriter, Write as _},
    path::Path,
};

use anyhow::Context as _;

use crate::{
    error::{MaskgenError, MaskgenResult},
    model::MaskDocument,
    tile::Tile,
};

/// Serialize a tile as a mask JSON document at `path`, creating parent
/// directories as needed. An existing file is overwritten; a failure partway
/// through may leave a partial file behind.
pub fn write_mask(tile: &Tile, path: &Path) -> MaskgenResult<()> {
    ensure_parent_dir(path)?;

    let doc = MaskDocument::from_tile(tile);
    let file = File::create(path).map_err(|e| MaskgenError::io(path, e))?;
    let mut out = BufWriter::new(file);
    serde_json::to_writer(&mut out, &doc).map_err(|e| MaskgenError::serde(e.to_string()))?;
    out.flush().map_err(|e| MaskgenError::io(path, e))?;

    tracing::debug!(path = %path.display(), values = doc.data.len(), "mask written");
    Ok(())
}

/// Create the parent directory of `path` when it does not exist yet.
pub fn ensure_parent_dir(path: &Path) -> MaskgenResult<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create output directory '{}'", parent.display()))?;
    }
    Ok(())
}
