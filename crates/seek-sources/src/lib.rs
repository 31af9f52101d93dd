//! seek-sources: database source adapters for seek.
//!
//! Each adapter implements [`seek_core::loader::Fetch`] and reads the whole
//! database document fresh on every call. [`Source::resolve`] picks the
//! adapter from a location string; [`Source::resolve_or_invalid`] turns a
//! location that cannot be resolved into a source whose every load fails,
//! so the failure surfaces like any other load failure.

pub mod file;
pub mod http;
pub mod location;

pub use file::FileSource;
pub use http::{HttpSource, MAX_REDIRECTS};
pub use location::{resolve, Location};

use seek_core::loader::{Fetch, LoadError};
use std::time::Duration;

/// Errors raised while turning a location string into a [`Source`].
#[derive(Debug, Clone, thiserror::Error)]
pub enum SourceError {
    #[error("unsupported URL scheme `{0}` (use a local path, http:// or https://)")]
    UnsupportedScheme(String),
    #[error("invalid location `{location}`: {reason}")]
    InvalidLocation { location: String, reason: String },
}

/// Any supported database source.
#[derive(Debug, Clone)]
pub enum Source {
    File(FileSource),
    Http(HttpSource),
    /// A location that could not be resolved. Loading it always fails.
    Invalid { location: String, error: SourceError },
}

impl Source {
    /// Resolve `location` (relative to `base` when given) and build the
    /// matching adapter. `timeout` applies to HTTP requests only.
    pub fn resolve(location: &str, base: Option<&str>, timeout: Duration) -> Result<Self, SourceError> {
        Ok(match resolve(location, base)? {
            Location::Path(path) => Source::File(FileSource::new(path)),
            Location::Url(url) => Source::Http(HttpSource::new(&url, timeout)?),
        })
    }

    /// Like [`Source::resolve`], but a resolution error becomes
    /// [`Source::Invalid`] instead of ending the caller.
    pub fn resolve_or_invalid(location: &str, base: Option<&str>, timeout: Duration) -> Self {
        Self::resolve(location, base, timeout).unwrap_or_else(|error| {
            tracing::warn!(location, base, error = %error, "database location cannot be resolved");
            Source::Invalid {
                location: location.to_string(),
                error,
            }
        })
    }
}

impl Fetch for Source {
    fn location(&self) -> String {
        match self {
            Source::File(source) => source.location(),
            Source::Http(source) => source.location(),
            Source::Invalid { location, .. } => location.clone(),
        }
    }

    async fn fetch(&self) -> Result<Vec<u8>, LoadError> {
        match self {
            Source::File(source) => source.fetch().await,
            Source::Http(source) => source.fetch().await,
            Source::Invalid { location, error } => Err(LoadError::Fetch {
                location: location.clone(),
                source: Box::new(error.clone()),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_name_is_a_file_source() {
        let source = Source::resolve("database.json", None, Duration::from_secs(1)).unwrap();
        assert!(matches!(source, Source::File(_)));
    }

    #[test]
    fn http_base_makes_an_http_source() {
        let source =
            Source::resolve("database.json", Some("http://127.0.0.1:8080/site/"), Duration::from_secs(1))
                .unwrap();
        assert_eq!(source.location(), "http://127.0.0.1:8080/site/database.json");
    }

    #[test]
    fn https_base_makes_an_http_source() {
        let source =
            Source::resolve("database.json", Some("https://example.test/site/"), Duration::from_secs(1))
                .unwrap();
        assert!(matches!(source, Source::Http(_)));
        assert_eq!(source.location(), "https://example.test/site/database.json");
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn unresolvable_location_fails_every_load() {
        let source = Source::resolve_or_invalid(
            "database.json",
            Some("file://elsewhere.test/site/"),
            Duration::from_secs(1),
        );
        assert!(matches!(source, Source::Invalid { .. }), "{source:?}");
        assert_eq!(source.location(), "database.json");

        for _ in 0..2 {
            let err = source.fetch().await.unwrap_err();
            assert!(matches!(err, LoadError::Fetch { .. }), "{err:?}");
        }
    }
}
