//! HTTP(S) source: an uncached `GET` through the hyper client.
//!
//! Every request carries `Cache-Control: no-cache, no-store` and
//! `Pragma: no-cache` so proxies and servers hand back a fresh copy. The
//! connector speaks both `http://` and `https://` (rustls with the webpki
//! root store). Redirects are followed up to [`MAX_REDIRECTS`] hops and the
//! status of the final response decides success; any non-2xx is a load
//! failure.

use crate::SourceError;
use bytes::Bytes;
use http_body_util::{BodyExt, Empty};
use hyper::{body::Incoming, header, HeaderMap, Request, Response, StatusCode, Uri};
use hyper_rustls::{HttpsConnector, HttpsConnectorBuilder};
use hyper_util::{
    client::legacy::{connect::HttpConnector, Client},
    rt::TokioExecutor,
};
use seek_core::loader::{Fetch, LoadError};
use std::{fmt, str::FromStr, time::Duration};
use url::Url;

const USER_AGENT: &str = concat!("seek/", env!("CARGO_PKG_VERSION"));

/// Redirect hops followed before giving up.
pub const MAX_REDIRECTS: usize = 10;

type HttpsClient = Client<HttpsConnector<HttpConnector>, Empty<Bytes>>;

/// Why a redirect could not be followed.
#[derive(Debug, thiserror::Error)]
pub enum RedirectError {
    #[error("gave up after {0} redirects")]
    TooMany(usize),
    #[error("redirect status {0} without a usable Location header")]
    MissingLocation(u16),
    #[error("redirect to `{target}`: {source}")]
    BadTarget {
        target: String,
        #[source]
        source: url::ParseError,
    },
    #[error("redirect to unsupported scheme `{0}`")]
    UnsupportedScheme(String),
}

#[derive(Clone)]
pub struct HttpSource {
    url: Url,
    client: HttpsClient,
    timeout: Duration,
}

impl fmt::Debug for HttpSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpSource")
            .field("url", &self.url.as_str())
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

impl HttpSource {
    pub fn new(url: &Url, timeout: Duration) -> Result<Self, SourceError> {
        if !is_web_scheme(url.scheme()) {
            return Err(SourceError::UnsupportedScheme(url.scheme().to_string()));
        }
        to_uri(url).map_err(|e| SourceError::InvalidLocation {
            location: url.to_string(),
            reason: e.to_string(),
        })?;

        let connector = HttpsConnectorBuilder::new()
            .with_webpki_roots()
            .https_or_http()
            .enable_http1()
            .build();
        let client = Client::builder(TokioExecutor::new()).build(connector);

        Ok(Self {
            url: url.clone(),
            client,
            timeout,
        })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    async fn get(&self) -> Result<Vec<u8>, LoadError> {
        let mut url = self.url.clone();
        for _ in 0..=MAX_REDIRECTS {
            let response = self.send(&url).await?;
            let status = response.status();
            tracing::debug!(%url, status = status.as_u16(), "database response");

            if is_followed_redirect(status) {
                url = redirect_target(&url, status, response.headers())
                    .map_err(|e| self.fetch_error(e))?;
                tracing::debug!(next = %url, "following redirect");
                continue;
            }
            if !status.is_success() {
                return Err(LoadError::Status {
                    location: url.to_string(),
                    status: status.as_u16(),
                });
            }

            let body = response
                .into_body()
                .collect()
                .await
                .map_err(|e| self.fetch_error(e))?
                .to_bytes();
            return Ok(body.to_vec());
        }
        Err(self.fetch_error(RedirectError::TooMany(MAX_REDIRECTS)))
    }

    async fn send(&self, url: &Url) -> Result<Response<Incoming>, LoadError> {
        let uri = to_uri(url).map_err(|e| self.fetch_error(e))?;
        let request = Request::get(uri)
            .header(header::CACHE_CONTROL, "no-cache, no-store")
            .header(header::PRAGMA, "no-cache")
            .header(header::ACCEPT, "application/json")
            .header(header::USER_AGENT, USER_AGENT)
            .body(Empty::<Bytes>::new())
            .map_err(|e| self.fetch_error(e))?;

        self.client
            .request(request)
            .await
            .map_err(|e| self.fetch_error(e))
    }

    fn fetch_error(&self, err: impl std::error::Error + Send + Sync + 'static) -> LoadError {
        LoadError::Fetch {
            location: self.location(),
            source: Box::new(err),
        }
    }
}

impl Fetch for HttpSource {
    fn location(&self) -> String {
        self.url.to_string()
    }

    async fn fetch(&self) -> Result<Vec<u8>, LoadError> {
        tokio::time::timeout(self.timeout, self.get())
            .await
            .map_err(|_| LoadError::Timeout(self.location()))?
    }
}

fn is_web_scheme(scheme: &str) -> bool {
    matches!(scheme, "http" | "https")
}

fn to_uri(url: &Url) -> Result<Uri, <Uri as FromStr>::Err> {
    url.as_str().parse::<Uri>()
}

fn is_followed_redirect(status: StatusCode) -> bool {
    matches!(
        status,
        StatusCode::MOVED_PERMANENTLY
            | StatusCode::FOUND
            | StatusCode::SEE_OTHER
            | StatusCode::TEMPORARY_REDIRECT
            | StatusCode::PERMANENT_REDIRECT
    )
}

/// Resolve a response's `Location` header against the URL that produced it.
fn redirect_target(current: &Url, status: StatusCode, headers: &HeaderMap) -> Result<Url, RedirectError> {
    let target = headers
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .ok_or(RedirectError::MissingLocation(status.as_u16()))?;
    let next = current.join(target).map_err(|source| RedirectError::BadTarget {
        target: target.to_string(),
        source,
    })?;
    if !is_web_scheme(next.scheme()) {
        return Err(RedirectError::UnsupportedScheme(next.scheme().to_string()));
    }
    Ok(next)
}

#[cfg(test)]
mod tests {
    use super::*;
    use hyper::header::HeaderValue;
    use rstest::rstest;

    fn located(target: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::LOCATION, HeaderValue::from_str(target).unwrap());
        headers
    }

    #[test]
    fn keeps_the_full_request_url() {
        let url = Url::parse("http://127.0.0.1:9000/data/database.json?v=1").unwrap();
        let source = HttpSource::new(&url, Duration::from_secs(1)).unwrap();
        assert_eq!(source.url().path(), "/data/database.json");
        assert_eq!(source.url().query(), Some("v=1"));
    }

    #[test]
    fn https_urls_are_accepted() {
        let url = Url::parse("https://example.test/site/database.json").unwrap();
        let source = HttpSource::new(&url, Duration::from_secs(1)).unwrap();
        assert_eq!(source.location(), "https://example.test/site/database.json");
    }

    #[test]
    fn other_schemes_are_rejected() {
        let url = Url::parse("ftp://example.test/database.json").unwrap();
        let err = HttpSource::new(&url, Duration::from_secs(1)).unwrap_err();
        assert!(matches!(err, SourceError::UnsupportedScheme(s) if s == "ftp"));
    }

    #[rstest]
    #[case("/database.json", "http://h.test/database.json")]
    #[case("v2/database.json", "http://h.test/site/v2/database.json")]
    #[case("https://cdn.test/db.json", "https://cdn.test/db.json")]
    fn redirect_targets_resolve_against_current_url(#[case] location: &str, #[case] expected: &str) {
        let current = Url::parse("http://h.test/site/old.json").unwrap();
        let next = redirect_target(&current, StatusCode::MOVED_PERMANENTLY, &located(location)).unwrap();
        assert_eq!(next.as_str(), expected);
    }

    #[test]
    fn redirect_without_location_is_an_error() {
        let current = Url::parse("http://h.test/old.json").unwrap();
        let err = redirect_target(&current, StatusCode::FOUND, &HeaderMap::new()).unwrap_err();
        assert!(matches!(err, RedirectError::MissingLocation(302)));
    }

    #[test]
    fn redirect_to_file_url_is_refused() {
        let current = Url::parse("http://h.test/old.json").unwrap();
        let err = redirect_target(&current, StatusCode::FOUND, &located("file:///etc/passwd")).unwrap_err();
        assert!(matches!(err, RedirectError::UnsupportedScheme(s) if s == "file"));
    }

    #[rstest]
    #[case(StatusCode::MOVED_PERMANENTLY, true)]
    #[case(StatusCode::PERMANENT_REDIRECT, true)]
    #[case(StatusCode::NOT_MODIFIED, false)]
    #[case(StatusCode::MULTIPLE_CHOICES, false)]
    fn only_location_redirects_are_followed(#[case] status: StatusCode, #[case] followed: bool) {
        assert_eq!(is_followed_redirect(status), followed);
    }

    #[tokio::test]
    async fn unreachable_host_is_a_fetch_error() {
        // Port 9 (discard) on loopback is closed on any sane test machine.
        let url = Url::parse("http://127.0.0.1:9/database.json").unwrap();
        let source = HttpSource::new(&url, Duration::from_secs(5)).unwrap();
        let err = source.fetch().await.unwrap_err();
        assert!(matches!(err, LoadError::Fetch { .. }), "{err:?}");
    }
}
