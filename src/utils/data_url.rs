// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! File-to-base64 conversion producing `data:` URLs.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use base64::{Engine as _, engine::general_purpose::STANDARD};

/// MIME type used when a blob does not carry one.
pub const FALLBACK_MIME: &str = "application/octet-stream";

/// In-memory binary payload with its MIME type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Blob {
    bytes: Vec<u8>,
    mime: String,
}

impl Blob {
    /// Wrap raw bytes. An empty `mime` becomes [`FALLBACK_MIME`].
    pub fn new(bytes: impl Into<Vec<u8>>, mime: impl Into<String>) -> Self {
        let mime = mime.into();
        Self {
            bytes: bytes.into(),
            mime: if mime.trim().is_empty() {
                FALLBACK_MIME.to_string()
            } else {
                mime
            },
        }
    }

    pub fn from_text(text: &str) -> Self {
        Self::new(text.as_bytes(), "text/plain")
    }

    /// Read a file from disk, guessing its MIME type from the extension.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error when the file cannot be read.
    pub fn from_path(path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path)
            .with_context(|| format!("Failed to read file for encoding: {:?}", path))?;
        Ok(Self::new(bytes, guess_mime(path)))
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn mime(&self) -> &str {
        &self.mime
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

pub(crate) fn guess_mime(path: &Path) -> String {
    mime_guess::from_path(path)
        .first_or_octet_stream()
        .essence_str()
        .to_string()
}

/// Encode a blob as `data:<mime>;base64,<payload>`.
pub fn blob_to_data_url(blob: &Blob) -> String {
    format!("data:{};base64,{}", blob.mime, STANDARD.encode(&blob.bytes))
}

/// Read a file and encode it as a data URL.
///
/// # Errors
///
/// Returns the read error when the file is missing or unreadable.
///
/// # Examples
///
/// ```rust,ignore
/// let url = frontkit::utils::file_to_base64(Path::new("notes.txt"))?;
/// assert!(url.starts_with("data:text/plain;base64,"));
/// ```
pub fn file_to_base64(path: &Path) -> Result<String> {
    let blob = Blob::from_path(path)?;
    tracing::debug!(path = %path.display(), bytes = blob.len(), mime = %blob.mime, "encoded file as data url");
    Ok(blob_to_data_url(&blob))
}

/// Background read started by [`file_to_base64_async`].
///
/// Dropping it abandons the result; the read itself still runs to completion.
pub struct PendingDataUrl {
    rx: crossbeam_channel::Receiver<Result<String>>,
}

impl PendingDataUrl {
    /// Non-blocking check; `None` while the read is still running.
    pub fn try_result(&self) -> Option<Result<String>> {
        match self.rx.try_recv() {
            Ok(result) => Some(result),
            Err(crossbeam_channel::TryRecvError::Empty) => None,
            Err(crossbeam_channel::TryRecvError::Disconnected) => {
                Some(Err(anyhow!("File reader stopped without a result")))
            }
        }
    }

    /// Block until the read finishes.
    ///
    /// # Errors
    ///
    /// Returns the read error, or an error when the worker vanished.
    pub fn wait(self) -> Result<String> {
        self.rx
            .recv()
            .map_err(|_| anyhow!("File reader stopped without a result"))?
    }
}

/// Read and encode a file on a background thread.
pub fn file_to_base64_async(path: PathBuf) -> PendingDataUrl {
    let (tx, rx) = crossbeam_channel::bounded(1);
    std::thread::spawn(move || {
        let _ = tx.send(file_to_base64(&path));
    });
    PendingDataUrl { rx }
}

/// Split a base64 data URL back into its MIME type and decoded bytes.
///
/// # Errors
///
/// Returns an error when the input is not a base64 `data:` URL or the payload is invalid.
pub fn decode_data_url(url: &str) -> Result<(String, Vec<u8>)> {
    let rest = url
        .strip_prefix("data:")
        .ok_or_else(|| anyhow!("Not a data URL"))?;
    let (header, payload) = rest
        .split_once(',')
        .ok_or_else(|| anyhow!("Data URL has no payload separator"))?;
    let mime = header
        .strip_suffix(";base64")
        .ok_or_else(|| anyhow!("Data URL is not base64 encoded"))?;
    let bytes = STANDARD
        .decode(payload)
        .context("Data URL payload is not valid base64")?;
    Ok((mime.to_string(), bytes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn text_blob_round_trips_through_data_url() {
        let url = blob_to_data_url(&Blob::from_text("Hello"));
        assert!(url.starts_with("data:"));
        assert_eq!(url, "data:text/plain;base64,SGVsbG8=");

        let (mime, bytes) = decode_data_url(&url).unwrap();
        assert_eq!(mime, "text/plain");
        assert_eq!(bytes, b"Hello");
    }

    #[test]
    fn empty_mime_falls_back_to_octet_stream() {
        let blob = Blob::new(vec![0u8, 1, 2], "");
        assert_eq!(blob.mime(), FALLBACK_MIME);
        assert_eq!(blob_to_data_url(&blob), "data:application/octet-stream;base64,AAEC");
    }

    #[test]
    fn file_to_base64_guesses_mime_from_extension() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("greeting.txt");
        fs::write(&path, "Hello").unwrap();

        let url = file_to_base64(&path).unwrap();
        assert_eq!(url, "data:text/plain;base64,SGVsbG8=");
    }

    #[test]
    fn unknown_extension_uses_fallback_mime() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("payload.unknownext");
        fs::write(&path, [0xffu8, 0x00]).unwrap();

        let (mime, bytes) = decode_data_url(&file_to_base64(&path).unwrap()).unwrap();
        assert_eq!(mime, FALLBACK_MIME);
        assert_eq!(bytes, vec![0xff, 0x00]);
    }

    #[test]
    fn missing_file_reports_read_error() {
        let tmp = TempDir::new().unwrap();
        let err = file_to_base64(&tmp.path().join("absent.txt")).unwrap_err();
        assert!(err.to_string().contains("Failed to read file"));
        assert!(err.root_cause().downcast_ref::<std::io::Error>().is_some());
    }

    #[test]
    fn async_read_resolves_with_data_url() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("note.txt");
        fs::write(&path, "Hello").unwrap();

        let pending = file_to_base64_async(path);
        assert_eq!(pending.wait().unwrap(), "data:text/plain;base64,SGVsbG8=");
    }

    #[test]
    fn async_read_rejects_with_read_error() {
        let tmp = TempDir::new().unwrap();
        let pending = file_to_base64_async(tmp.path().join("absent.bin"));
        assert!(pending.wait().is_err());
    }

    #[test]
    fn decode_rejects_non_base64_urls() {
        assert!(decode_data_url("http://example.com").is_err());
        assert!(decode_data_url("data:text/plain,Hello").is_err());
        assert!(decode_data_url("data:text/plain;base64,@@@").is_err());
    }
}
