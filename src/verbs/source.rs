use std::fs;
use std::io;
use std::path::PathBuf;
use std::time::Duration;

use super::{VerbCollection, VerbRecord};
use crate::error::LoadError;

const BUNDLED_VERBS: &str = include_str!("../../data/verbs.json");
const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Raw result of fetching the verb asset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchResponse {
    pub status: u16,
    pub body: String,
}

impl FetchResponse {
    pub fn ok(body: impl Into<String>) -> Self {
        Self {
            status: 200,
            body: body.into(),
        }
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Single read-only fetch of the structured verb asset.
pub trait AssetFetcher {
    /// Human readable location used in logs and error messages.
    fn location(&self) -> String;

    fn fetch(&self) -> Result<FetchResponse, LoadError>;
}

/// Reads the verb list from a local JSON file. A missing file is reported as
/// status 404 so it surfaces the same way a missing remote asset does.
#[derive(Debug, Clone)]
pub struct FileFetcher {
    path: PathBuf,
}

impl FileFetcher {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl AssetFetcher for FileFetcher {
    fn location(&self) -> String {
        self.path.display().to_string()
    }

    fn fetch(&self) -> Result<FetchResponse, LoadError> {
        match fs::read_to_string(&self.path) {
            Ok(body) => Ok(FetchResponse::ok(body)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(FetchResponse {
                status: 404,
                body: String::new(),
            }),
            Err(err) => Err(LoadError::transport(self.location(), err)),
        }
    }
}

/// Fetches the verb list over HTTP(S).
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    url: String,
    connect_timeout: Duration,
}

impl HttpFetcher {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
        }
    }

    fn client(&self) -> Result<reqwest::blocking::Client, LoadError> {
        reqwest::blocking::Client::builder()
            .connect_timeout(self.connect_timeout)
            .build()
            .map_err(|err| LoadError::transport(&self.url, err))
    }
}

impl AssetFetcher for HttpFetcher {
    fn location(&self) -> String {
        self.url.clone()
    }

    fn fetch(&self) -> Result<FetchResponse, LoadError> {
        let response = self
            .client()?
            .get(&self.url)
            .send()
            .map_err(|err| LoadError::transport(&self.url, err))?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .map_err(|err| LoadError::transport(&self.url, err))?;
        Ok(FetchResponse { status, body })
    }
}

/// The verb list compiled into the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedFetcher;

impl AssetFetcher for EmbeddedFetcher {
    fn location(&self) -> String {
        "bundled verbs.json".to_string()
    }

    fn fetch(&self) -> Result<FetchResponse, LoadError> {
        Ok(FetchResponse::ok(BUNDLED_VERBS))
    }
}

/// Where the verb list comes from, as chosen by configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum VerbSource {
    #[default]
    Bundled,
    File(PathBuf),
    Url(String),
}

impl VerbSource {
    /// Interpret a configured location: `http(s)://` prefixes are URLs,
    /// `bundled` (or an empty string) is the built-in list, anything else a path.
    pub fn parse(location: &str) -> Self {
        let trimmed = location.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("bundled") {
            Self::Bundled
        } else if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
            Self::Url(trimmed.to_string())
        } else {
            Self::File(PathBuf::from(trimmed))
        }
    }

    pub fn fetcher(&self) -> Box<dyn AssetFetcher> {
        match self {
            Self::Bundled => Box::new(EmbeddedFetcher),
            Self::File(path) => Box::new(FileFetcher::new(path.clone())),
            Self::Url(url) => Box::new(HttpFetcher::new(url.clone())),
        }
    }

    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Self::Bundled => "bundled".to_string(),
            Self::File(path) => path.display().to_string(),
            Self::Url(url) => url.clone(),
        }
    }
}

/// Decode a JSON array of verb objects, rejecting entries with empty fields.
pub fn parse_verbs(body: &str) -> Result<VerbCollection, LoadError> {
    let records: Vec<VerbRecord> = serde_json::from_str(body)?;

    for (index, record) in records.iter().enumerate() {
        let named = [
            ("v1", &record.v1),
            ("v2", &record.v2),
            ("v3", &record.v3),
            ("translation", &record.translation),
        ];
        if let Some((field, _)) = named.iter().find(|(_, value)| value.trim().is_empty()) {
            return Err(LoadError::Schema { index, field });
        }
    }

    Ok(records.into())
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn bundled_list_parses() {
        let verbs = parse_verbs(BUNDLED_VERBS).expect("bundled verbs parse");
        assert!(verbs.len() > 50);
        assert_eq!(verbs[0].v1, "arise");
    }

    #[test]
    fn empty_field_is_a_schema_error() {
        let err = parse_verbs(r#"[{"v1":"go","v2":"","v3":"gone","translation":"идти"}]"#)
            .unwrap_err();
        assert!(matches!(err, LoadError::Schema { index: 0, field: "v2" }));
    }

    #[test]
    fn missing_field_is_malformed() {
        let err = parse_verbs(r#"[{"v1":"go"}]"#).unwrap_err();
        assert!(matches!(err, LoadError::Malformed(_)));
    }

    #[test]
    fn missing_file_reports_not_found_status() {
        let dir = tempfile::tempdir().unwrap();
        let fetcher = FileFetcher::new(dir.path().join("verbs.json"));
        let response = fetcher.fetch().unwrap();
        assert_eq!(response.status, 404);
        assert!(!response.is_success());
    }

    #[test]
    fn file_fetcher_reads_body() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "[]").unwrap();
        let response = FileFetcher::new(file.path()).fetch().unwrap();
        assert!(response.is_success());
        assert_eq!(response.body, "[]");
    }

    #[test]
    fn unreachable_url_is_a_transport_error() {
        let fetcher = HttpFetcher::new("http://127.0.0.1:1/verbs.json");
        match fetcher.fetch() {
            Err(LoadError::Transport { location, .. }) => {
                assert_eq!(location, "http://127.0.0.1:1/verbs.json");
            }
            other => panic!("expected a transport error, got {other:?}"),
        }
    }

    #[test]
    fn source_locations_are_classified() {
        assert_eq!(VerbSource::parse(""), VerbSource::Bundled);
        assert_eq!(VerbSource::parse("Bundled"), VerbSource::Bundled);
        assert_eq!(
            VerbSource::parse("https://example.org/verbs.json"),
            VerbSource::Url("https://example.org/verbs.json".into())
        );
        assert_eq!(
            VerbSource::parse("./verbs.json"),
            VerbSource::File(PathBuf::from("./verbs.json"))
        );
    }
}
