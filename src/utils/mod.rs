// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Stand-alone helper utilities with no shared state.

pub mod clipboard;
pub mod data_url;
pub mod hash;
pub mod query_string;

/// Copy text to the clipboard, best effort.
pub use clipboard::{ClipboardSink, copy_to_clipboard, try_copy_to_clipboard};
/// Encode files and blobs as `data:` URLs.
pub use data_url::{Blob, PendingDataUrl, decode_data_url, file_to_base64, file_to_base64_async};
/// Hash stub.
pub use hash::{HashAlgorithm, HashError, get_hash};
/// Query-string codec.
pub use query_string::{QueryParams, QueryValue, object_to_query_string, query_string_to_object};
