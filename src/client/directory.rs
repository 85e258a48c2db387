//! Team directory client implementation

use std::fmt;
use std::str::FromStr;

use async_trait::async_trait;
use reqwest::{Client as HttpClient, StatusCode, Url};
use serde::{Deserialize, Serialize};

use super::{DirectoryApi, TeamRecord};
use crate::error::{ConfigError, DirectoryError, Result};

/// Directory API revisions the client can target.
///
/// Each revision pins both the resource path and the payload envelope, so
/// the two can never be mixed. The envelope is part of the endpoint
/// contract and is not auto-detected from the response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApiVersion {
    /// `/api/teams` returning a bare JSON array of teams
    V0,

    /// `/api/v1/teams` returning the array under a `teams` wrapper key
    #[default]
    V1,
}

/// Response envelope for [`ApiVersion::V1`]
#[derive(Deserialize)]
struct TeamsEnvelope {
    teams: Vec<TeamRecord>,
}

impl ApiVersion {
    /// Resource path of the teams listing, relative to the endpoint.
    pub fn path(self) -> &'static str {
        match self {
            ApiVersion::V0 => "/api/teams",
            ApiVersion::V1 => "/api/v1/teams",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ApiVersion::V0 => "v0",
            ApiVersion::V1 => "v1",
        }
    }

    /// Decode a response body according to this revision's envelope.
    ///
    /// The top-level shape is strict; individual records tolerate missing
    /// and unknown fields.
    fn decode(self, body: &str) -> serde_json::Result<Vec<TeamRecord>> {
        match self {
            ApiVersion::V0 => serde_json::from_str(body),
            ApiVersion::V1 => serde_json::from_str::<TeamsEnvelope>(body).map(|e| e.teams),
        }
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ApiVersion {
    type Err = ConfigError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "v0" => Ok(ApiVersion::V0),
            "v1" => Ok(ApiVersion::V1),
            other => Err(ConfigError::UnknownApiVersion(other.to_string())),
        }
    }
}

/// Team directory HTTP client
pub struct DirectoryClient {
    http: HttpClient,
    base_url: String,
    version: ApiVersion,
}

impl DirectoryClient {
    /// Create a client for the directory at `endpoint`.
    ///
    /// The endpoint is validated here so that a malformed URL fails before
    /// any request is attempted.
    pub fn new(endpoint: &str, version: ApiVersion) -> Result<Self> {
        let base = Url::parse(endpoint).map_err(|e| ConfigError::InvalidEndpoint {
            url: endpoint.to_string(),
            reason: e.to_string(),
        })?;

        let http = HttpClient::builder()
            .build()
            .map_err(|e| DirectoryError::Transport(e.to_string()))?;

        Ok(Self {
            http,
            base_url: base.as_str().trim_end_matches('/').to_string(),
            version,
        })
    }

    /// The configured endpoint, without a trailing slash.
    pub fn endpoint(&self) -> &str {
        &self.base_url
    }

    pub fn version(&self) -> ApiVersion {
        self.version
    }
}

#[async_trait]
impl DirectoryApi for DirectoryClient {
    async fn fetch_teams(&self) -> Result<Vec<TeamRecord>> {
        let url = format!("{}{}", self.base_url, self.version.path());

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(DirectoryError::from)?;

        // Reject non-OK responses before touching the body.
        let status = response.status();
        if status != StatusCode::OK {
            return Err(DirectoryError::Upstream { status }.into());
        }

        let body = response.text().await.map_err(|e| {
            DirectoryError::Transport(format!("Failed to read response body: {}", e))
        })?;

        let teams = self
            .version
            .decode(&body)
            .map_err(|e| DirectoryError::Decode(e.to_string()))?;

        if teams.iter().any(|team| team.id.is_empty()) {
            return Err(DirectoryError::Decode("team record with an empty id".to_string()).into());
        }

        Ok(teams)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_api_version_paths() {
        assert_eq!(ApiVersion::V0.path(), "/api/teams");
        assert_eq!(ApiVersion::V1.path(), "/api/v1/teams");
    }

    #[test]
    fn test_api_version_from_str() {
        assert_eq!("v0".parse::<ApiVersion>().unwrap(), ApiVersion::V0);
        assert_eq!("v1".parse::<ApiVersion>().unwrap(), ApiVersion::V1);

        match "v2".parse::<ApiVersion>() {
            Err(ConfigError::UnknownApiVersion(v)) => assert_eq!(v, "v2"),
            other => panic!("Expected UnknownApiVersion, got {:?}", other),
        }
    }

    #[test]
    fn test_new_rejects_malformed_endpoint() {
        let result = DirectoryClient::new("not a url", ApiVersion::V1);

        match result {
            Err(Error::Config(ConfigError::InvalidEndpoint { url, .. })) => {
                assert_eq!(url, "not a url");
            }
            other => panic!("Expected InvalidEndpoint, got {:?}", other.map(|_| ())),
        }
    }

    #[tokio::test]
    async fn test_fetch_teams_decodes_bare_array() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/api/teams")
            .with_status(200)
            .with_body(
                r#"[
                    {"id": "t1", "name": "Alpha"},
                    {"id": "t2", "name": "Beta", "snpaas_org": "org-b"}
                ]"#,
            )
            .create_async()
            .await;

        let client = DirectoryClient::new(&server.url(), ApiVersion::V0).unwrap();
        let teams = client.fetch_teams().await.unwrap();

        assert_eq!(teams.len(), 2);
        assert_eq!(teams[0].id, "t1");
        assert_eq!(teams[1].id, "t2");
        assert_eq!(teams[1].cloud_org.as_deref(), Some("org-b"));
    }

    #[tokio::test]
    async fn test_fetch_teams_decodes_wrapped_envelope() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/api/v1/teams")
            .with_status(200)
            .with_body(
                r#"{"teams": [
                    {"id": "t1", "department": "Platform"},
                    {"id": "t2", "domain": "publishing", "cloud_org": "org-b"}
                ]}"#,
            )
            .create_async()
            .await;

        let client = DirectoryClient::new(&server.url(), ApiVersion::V1).unwrap();
        let teams = client.fetch_teams().await.unwrap();

        assert_eq!(teams.len(), 2);
        assert_eq!(teams[0].department.as_deref(), Some("Platform"));
        assert_eq!(teams[1].cloud_org.as_deref(), Some("org-b"));
    }

    #[tokio::test]
    async fn test_fetch_teams_preserves_source_order() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/api/teams")
            .with_status(200)
            .with_body(r#"[{"id": "z"}, {"id": "a"}, {"id": "m"}]"#)
            .create_async()
            .await;

        let client = DirectoryClient::new(&server.url(), ApiVersion::V0).unwrap();
        let teams = client.fetch_teams().await.unwrap();

        let ids: Vec<&str> = teams.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["z", "a", "m"]);
    }

    #[tokio::test]
    async fn test_fetch_teams_empty_array_is_not_an_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/api/teams")
            .with_status(200)
            .with_body("[]")
            .create_async()
            .await;

        let client = DirectoryClient::new(&server.url(), ApiVersion::V0).unwrap();
        let teams = client.fetch_teams().await.unwrap();

        assert!(teams.is_empty());
    }

    #[tokio::test]
    async fn test_fetch_teams_server_error_skips_decoding() {
        let mut server = mockito::Server::new_async().await;
        // The body is valid JSON; it must still never reach the decoder.
        let _mock = server
            .mock("GET", "/api/v1/teams")
            .with_status(500)
            .with_body(r#"{"teams": []}"#)
            .create_async()
            .await;

        let client = DirectoryClient::new(&server.url(), ApiVersion::V1).unwrap();
        let err = client.fetch_teams().await.unwrap_err();

        match err {
            Error::Directory(DirectoryError::Upstream { status }) => {
                assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
            }
            other => panic!("Expected Upstream, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_fetch_teams_wrong_envelope_is_decode_error() {
        let mut server = mockito::Server::new_async().await;
        // An object body while the v0 contract promises a bare array.
        let _mock = server
            .mock("GET", "/api/teams")
            .with_status(200)
            .with_body(r#"{"teams": [{"id": "t1"}]}"#)
            .create_async()
            .await;

        let client = DirectoryClient::new(&server.url(), ApiVersion::V0).unwrap();
        let err = client.fetch_teams().await.unwrap_err();

        match err {
            Error::Directory(DirectoryError::Decode(_)) => (),
            other => panic!("Expected Decode, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_fetch_teams_bare_array_under_v1_is_decode_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/api/v1/teams")
            .with_status(200)
            .with_body(r#"[{"id": "t1"}]"#)
            .create_async()
            .await;

        let client = DirectoryClient::new(&server.url(), ApiVersion::V1).unwrap();
        let err = client.fetch_teams().await.unwrap_err();

        match err {
            Error::Directory(DirectoryError::Decode(_)) => (),
            other => panic!("Expected Decode, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_fetch_teams_malformed_json_is_decode_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/api/teams")
            .with_status(200)
            .with_body(r#"[{"id": "t1""#)
            .create_async()
            .await;

        let client = DirectoryClient::new(&server.url(), ApiVersion::V0).unwrap();
        let err = client.fetch_teams().await.unwrap_err();

        match err {
            Error::Directory(DirectoryError::Decode(_)) => (),
            other => panic!("Expected Decode, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_fetch_teams_empty_id_is_rejected() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/api/teams")
            .with_status(200)
            .with_body(r#"[{"id": ""}]"#)
            .create_async()
            .await;

        let client = DirectoryClient::new(&server.url(), ApiVersion::V0).unwrap();
        let err = client.fetch_teams().await.unwrap_err();

        match err {
            Error::Directory(DirectoryError::Decode(msg)) => {
                assert!(msg.contains("empty id"));
            }
            other => panic!("Expected Decode, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_fetch_teams_connection_failure_is_transport_error() {
        // Nothing listens on port 1.
        let client = DirectoryClient::new("http://127.0.0.1:1", ApiVersion::V1).unwrap();
        let err = client.fetch_teams().await.unwrap_err();

        match err {
            Error::Directory(DirectoryError::Transport(_)) => (),
            other => panic!("Expected Transport, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_endpoint_trailing_slash_is_normalized() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/api/v1/teams")
            .with_status(200)
            .with_body(r#"{"teams": []}"#)
            .create_async()
            .await;

        let endpoint = format!("{}/", server.url());
        let client = DirectoryClient::new(&endpoint, ApiVersion::V1).unwrap();

        assert!(client.fetch_teams().await.is_ok());
    }
}
