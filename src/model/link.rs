use serde::{Deserialize, Serialize};
use url::Url;

/// Absolute `http` or `https` URL.
///
/// Rejects relative references and other schemes during deserialization, so payloads
/// carrying e.g. `ftp://` or `javascript:` links fail validation.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(try_from = "Url", into = "String")]
pub struct HttpUrl(Url);

impl TryFrom<Url> for HttpUrl {
    type Error = String;

    fn try_from(url: Url) -> Result<Self, Self::Error> {
        match url.scheme() {
            "http" | "https" if url.has_host() => Ok(Self(url)),
            scheme => Err(format!("URL scheme '{}' is not allowed, expected http or https", scheme)),
        }
    }
}

impl From<HttpUrl> for String {
    fn from(url: HttpUrl) -> Self {
        url.0.into()
    }
}
