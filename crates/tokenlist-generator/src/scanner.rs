use std::{io::ErrorKind, path::Path};

use tracing::debug;

use crate::{Error, Result};

pub const IMAGE_EXTENSION: &str = ".png";

/// A logo file named after the token it depicts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenImage {
    /// File stem, kept verbatim.
    pub address: String,
    pub file_name: String,
}

/// Lists `<tokens_dir>/<network_id>/*.png` sorted by file name.
///
/// A network without a directory simply has no tokens.
pub async fn scan(tokens_dir: &Path, network_id: &str) -> Result<Vec<TokenImage>> {
    let dir = tokens_dir.join(network_id);
    let io_error = |source| Error::Io {
        path: dir.clone(),
        source,
    };

    match tokio::fs::metadata(&dir).await {
        Ok(metadata) if metadata.is_dir() => {}
        Ok(_) => {
            debug!(dir = %dir.display(), "Token path is not a directory");
            return Ok(Vec::new());
        }
        Err(error) if error.kind() == ErrorKind::NotFound => {
            debug!(dir = %dir.display(), "No token directory for network");
            return Ok(Vec::new());
        }
        Err(error) => return Err(io_error(error)),
    }

    let mut entries = tokio::fs::read_dir(&dir).await.map_err(io_error)?;
    let mut images = Vec::new();

    while let Some(entry) = entries.next_entry().await.map_err(io_error)? {
        if entry.file_type().await.map_err(io_error)?.is_dir() {
            continue;
        }
        let Ok(file_name) = entry.file_name().into_string() else {
            debug!(path = %entry.path().display(), "Skipping non UTF-8 file name");
            continue;
        };
        if !file_name.ends_with(IMAGE_EXTENSION) {
            continue;
        }
        // A bare `.png` is its own stem.
        let Some(address) = Path::new(&file_name).file_stem().and_then(|stem| stem.to_str())
        else {
            continue;
        };
        images.push(TokenImage {
            address: address.to_owned(),
            file_name,
        });
    }

    images.sort_by(|a, b| a.file_name.cmp(&b.file_name));
    Ok(images)
}
