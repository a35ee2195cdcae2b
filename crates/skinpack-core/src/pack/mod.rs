//! Resource pack builder.
//!
//! Produces an in-memory zip holding `pack.mcmeta` at the root and the skin
//! at the texture path Toi's Item Animator reads. Nothing is written to disk
//! here; saving is the job of [`crate::save`].

mod meta;

pub use meta::{PackMeta, PackSection, TextComponent, PACK_FORMAT};

use std::io::{Cursor, Write};
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

/// Archive entry for the pack metadata.
pub const MCMETA_PATH: &str = "pack.mcmeta";
/// Archive entry for the skin image.
pub const TEXTURE_PATH: &str = "assets/item/textures/item/hands/texture.png";
/// Suggested file name for the generated archive.
pub const PACK_FILENAME: &str = "Resourcepack for Item Animator.zip";

#[derive(Debug, thiserror::Error)]
pub enum PackError {
    #[error("serialize pack.mcmeta: {0}")]
    Json(#[from] serde_json::Error),
    #[error("write zip entry: {0}")]
    Zip(#[from] zip::result::ZipError),
    #[error("write zip data: {0}")]
    Io(#[from] std::io::Error),
}

/// Build the resource pack for `skin` and return the zip bytes.
///
/// The skin bytes are stored unmodified. On error no archive is returned.
pub fn build_pack(skin: &[u8]) -> Result<Vec<u8>, PackError> {
    let mcmeta = PackMeta::item_animator().to_json()?;

    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    let options =
        SimpleFileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    zip.start_file(MCMETA_PATH, options)?;
    zip.write_all(mcmeta.as_bytes())?;

    zip.start_file(TEXTURE_PATH, options)?;
    zip.write_all(skin)?;

    let cursor = zip.finish()?;
    let bytes = cursor.into_inner();
    tracing::debug!(
        skin_bytes = skin.len(),
        archive_bytes = bytes.len(),
        "resource pack built"
    );
    Ok(bytes)
}
