//! Location resolution: where the database document lives.
//!
//! | `location`                 | `base`                  | Result                              |
//! |----------------------------|-------------------------|-------------------------------------|
//! | `http(s)://h/db.json`      | any                     | that URL                            |
//! | `file:///srv/db.json`      | any                     | `/srv/db.json`                      |
//! | `db.json`                  | `http://h/app/`         | `http://h/app/db.json`              |
//! | `db.json`                  | `http://h/app/index`    | `http://h/app/db.json`              |
//! | `db.json`                  | `https://h/app/`        | `https://h/app/db.json`             |
//! | `db.json`                  | `/srv/site`             | `/srv/site/db.json`                 |
//! | `db.json`                  | none                    | `db.json` (working directory)       |
//!
//! URL joining follows browser rules, so a base without a trailing slash
//! drops its last path segment.

use crate::SourceError;
use std::path::PathBuf;
use url::Url;

/// A resolved database location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Location {
    Path(PathBuf),
    Url(Url),
}

pub fn resolve(location: &str, base: Option<&str>) -> Result<Location, SourceError> {
    if let Some(absolute) = parse_url(location) {
        return classify(absolute, location);
    }

    match base {
        Some(base) => match parse_url(base) {
            Some(base_url) => {
                let joined = base_url.join(location).map_err(|e| SourceError::InvalidLocation {
                    location: location.to_string(),
                    reason: e.to_string(),
                })?;
                classify(joined, location)
            }
            None => Ok(Location::Path(PathBuf::from(base).join(location))),
        },
        None => Ok(Location::Path(PathBuf::from(location))),
    }
}

/// Only strings with a recognised scheme count as URLs; anything else
/// (including Windows drive paths like `C:\db.json`) is a filesystem path.
fn parse_url(s: &str) -> Option<Url> {
    let url = Url::parse(s).ok()?;
    matches!(url.scheme(), "http" | "https" | "file").then_some(url)
}

fn classify(url: Url, original: &str) -> Result<Location, SourceError> {
    match url.scheme() {
        "http" | "https" => Ok(Location::Url(url)),
        "file" => url
            .to_file_path()
            .map(Location::Path)
            .map_err(|()| SourceError::InvalidLocation {
                location: original.to_string(),
                reason: "file URL has no local path".to_string(),
            }),
        other => Err(SourceError::UnsupportedScheme(other.to_string())),
    }
}
