// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! String hashing helper. Digest computation is not wired up yet.

use std::fmt;
use std::str::FromStr;

/// Digest algorithms callers may ask for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HashAlgorithm {
    Sha256,
    Md5,
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Sha256 => "SHA-256",
            Self::Md5 => "MD5",
        })
    }
}

impl FromStr for HashAlgorithm {
    type Err = HashError;

    /// Accepts `SHA-256`/`sha256` and `MD5`, case-insensitively.
    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name.trim().to_ascii_lowercase().as_str() {
            "sha-256" | "sha256" => Ok(Self::Sha256),
            "md5" => Ok(Self::Md5),
            _ => Err(HashError::UnsupportedAlgorithm(name.to_string())),
        }
    }
}

/// Failures reported by [`get_hash`].
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum HashError {
    #[error("unsupported hash algorithm: {0:?}")]
    UnsupportedAlgorithm(String),
    #[error("{0} hashing is not implemented")]
    NotImplemented(HashAlgorithm),
}

/// Hex digest of `input` under `algorithm`.
///
/// # Errors
///
/// Always fails for now: [`HashError::UnsupportedAlgorithm`] for unknown names,
/// [`HashError::NotImplemented`] otherwise.
pub fn get_hash(input: &str, algorithm: &str) -> Result<String, HashError> {
    let algorithm: HashAlgorithm = algorithm.parse()?;
    tracing::debug!(%algorithm, bytes = input.len(), "hash requested");
    Err(HashError::NotImplemented(algorithm))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_algorithms_report_not_implemented() {
        assert_eq!(
            get_hash("abc", "SHA-256"),
            Err(HashError::NotImplemented(HashAlgorithm::Sha256))
        );
        assert_eq!(
            get_hash("abc", "md5"),
            Err(HashError::NotImplemented(HashAlgorithm::Md5))
        );
    }

    #[test]
    fn unknown_algorithm_is_reported_by_name() {
        let err = get_hash("abc", "crc32").unwrap_err();
        assert_eq!(err, HashError::UnsupportedAlgorithm("crc32".into()));
        assert_eq!(err.to_string(), "unsupported hash algorithm: \"crc32\"");
    }

    #[test]
    fn algorithm_names_parse_case_insensitively() {
        assert_eq!("Sha256".parse::<HashAlgorithm>(), Ok(HashAlgorithm::Sha256));
        assert_eq!(" MD5 ".parse::<HashAlgorithm>(), Ok(HashAlgorithm::Md5));
        assert_eq!(HashAlgorithm::Sha256.to_string(), "SHA-256");
    }

    #[test]
    fn empty_input_still_fails() {
        assert!(get_hash("", "SHA-256").is_err());
    }
}
