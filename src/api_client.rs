use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::Url;
use serde_json::Value;

use crate::client::Transport;
use crate::error::Result;
use crate::settings::Settings;

/// reqwest-backed transport to the player service.
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new(timeout: Duration) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert("accept", HeaderValue::from_static("application/json"));

        Ok(Self {
            client: reqwest::Client::builder()
                .default_headers(headers)
                .timeout(timeout)
                .build()?,
        })
    }

    pub fn from_settings(settings: &Settings) -> Result<Self> {
        Self::new(settings.timeout)
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn fetch_json(&self, url: &Url) -> Result<Value> {
        let body = self
            .client
            .get(url.clone())
            .send()
            .await?
            .error_for_status()?
            .bytes()
            .await?;

        Ok(serde_json::from_slice(&body)?)
    }
}

#[cfg(test)]
mod test {
    use std::time::Duration;

    use reqwest::Url;
    use serde_json::json;

    use crate::api_client::HttpTransport;
    use crate::client::Transport;
    use crate::error::Error;

    #[tokio::test]
    async fn test_fetch_json() {
        let client = HttpTransport::new(Duration::from_secs(5)).unwrap();

        let mut server = mockito::Server::new_async().await;

        let json = r###"
            {
              "activeplayers": {
                "lastUpdatedOn": "2017-09-10 12:05:11 PM",
                "playerentry": [
                  {
                    "player": {
                      "ID": "7549",
                      "LastName": "Brady",
                      "FirstName": "Tom",
                      "JerseyNumber": "12",
                      "Position": "QB"
                    },
                    "team": {
                      "ID": "50",
                      "City": "New England",
                      "Name": "Patriots",
                      "Abbreviation": "NE"
                    }
                  }
                ]
              }
            }
        "###;

        let mock = server
            .mock("GET", "/v1.1/pull/nfl/current/active_players.json?player=tom-brady")
            .match_header("accept", "application/json")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(json)
            .create_async()
            .await;

        let url = Url::parse(&format!(
            "{}/v1.1/pull/nfl/current/active_players.json?player=tom-brady",
            server.url()
        ))
        .unwrap();
        let body = client.fetch_json(&url).await.unwrap();
        mock.assert();

        assert_eq!(
            body["activeplayers"]["playerentry"][0]["player"],
            json!({
                "ID": "7549",
                "LastName": "Brady",
                "FirstName": "Tom",
                "JerseyNumber": "12",
                "Position": "QB"
            })
        );
    }

    #[tokio::test]
    async fn test_error_status_is_transport_error() {
        let client = HttpTransport::new(Duration::from_secs(5)).unwrap();
        let mut server = mockito::Server::new_async().await;

        let mock = server
            .mock("GET", "/players.json?id=9")
            .with_status(500)
            .create_async()
            .await;

        let url = Url::parse(&format!("{}/players.json?id=9", server.url())).unwrap();
        let err = client.fetch_json(&url).await.unwrap_err();
        mock.assert();

        assert!(matches!(err, Error::Transport(_)));
    }

    #[tokio::test]
    async fn test_non_json_body_is_decode_error() {
        let client = HttpTransport::new(Duration::from_secs(5)).unwrap();
        let mut server = mockito::Server::new_async().await;

        let mock = server
            .mock("GET", "/players.json?id=9")
            .with_status(200)
            .with_body("<html>maintenance</html>")
            .create_async()
            .await;

        let url = Url::parse(&format!("{}/players.json?id=9", server.url())).unwrap();
        let err = client.fetch_json(&url).await.unwrap_err();
        mock.assert();

        assert!(matches!(err, Error::Decode(_)));
    }
}
