use std::path::{Path, PathBuf};

use anyhow::Context as _;

use crate::error::DotreelResult;

/// Raster formats accepted as frame sources.
const FRAME_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "gif", "bmp"];

/// Enumerate the frame images in `dir`, sorted lexicographically by path so
/// numbered exports (`frame_0001.png`, ...) play in order.
///
/// Non-image entries and subdirectories are ignored. An empty directory yields
/// an empty list, which plays back as an immediately-complete session.
pub fn discover_frames(dir: &Path) -> DotreelResult<Vec<PathBuf>> {
    let entries = std::fs::read_dir(dir)
        .with_context(|| format!("read frame directory '{}'", dir.display()))?;

    let mut frames = Vec::new();
    for entry in entries {
        let entry =
            entry.with_context(|| format!("read frame directory '{}'", dir.display()))?;
        let path = entry.path();
        if path.is_file() && has_frame_extension(&path) {
            frames.push(path);
        }
    }
    frames.sort();
    Ok(frames)
}

fn has_frame_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            FRAME_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
}
