use serde::Deserialize;
use serde::de::DeserializeOwned;

use super::EstimatorApi;
use super::error::ApiError;
use crate::model::{Estimate, FormInput};

/// Address of a locally running prediction service.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";

/// Body of `GET /locations`.
#[derive(Debug, Deserialize)]
struct LocationsResponse {
    locations: Vec<String>,
}

/// Body the service sends alongside a 4xx/5xx status.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// JSON-over-HTTP client for the prediction service.
#[derive(Debug, Clone)]
pub struct HttpEstimator {
    base_url: String,
    client: reqwest::Client,
}

impl HttpEstimator {
    /// Creates a client rooted at `base_url` (a trailing `/` is ignored).
    ///
    /// No timeout is configured; a request waits until the service answers
    /// or the connection fails.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(ApiError::Client)?;
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self { base_url, client })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{path}", self.base_url)
    }
}

/// Reads the full body, mapping error statuses and bad JSON to [`ApiError`].
async fn read_json<T: DeserializeOwned>(
    url: String,
    response: reqwest::Response,
) -> Result<T, ApiError> {
    let status = response.status();
    let body = match response.text().await {
        Ok(body) => body,
        Err(source) => return Err(ApiError::Request { url, source }),
    };

    if !status.is_success() {
        let message = serde_json::from_str::<ErrorBody>(&body)
            .map(|e| e.error)
            .unwrap_or(body);
        return Err(ApiError::Status {
            url,
            status: status.as_u16(),
            message,
        });
    }

    serde_json::from_str(&body).map_err(|source| ApiError::MalformedResponse { url, source })
}

impl EstimatorApi for HttpEstimator {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn locations(&self) -> Result<Vec<String>, ApiError> {
        let url = self.url("locations");
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|source| ApiError::Request {
                url: url.clone(),
                source,
            })?;
        let body: LocationsResponse = read_json(url, response).await?;
        Ok(body.locations)
    }

    async fn predict(&self, input: &FormInput) -> Result<Estimate, ApiError> {
        let url = self.url("predict");
        let response = self
            .client
            .post(&url)
            .json(input)
            .send()
            .await
            .map_err(|source| ApiError::Request {
                url: url.clone(),
                source,
            })?;
        read_json(url, response).await
    }
}

#[cfg(test)]
mod tests {
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::{TcpListener, TcpStream};
    use tokio::task::JoinHandle;

    use super::*;
    use crate::model::EstimateRange;

    /// Serves a single canned response, yielding the raw request text.
    async fn serve_once(status: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let handle = tokio::spawn(async move {
            let (mut stream, _) = listener.accept().await.unwrap();
            let request = read_request(&mut stream).await;
            let response = format!(
                "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            stream.write_all(response.as_bytes()).await.unwrap();
            stream.shutdown().await.unwrap();
            request
        });
        (format!("http://{addr}"), handle)
    }

    async fn read_request(stream: &mut TcpStream) -> String {
        let mut buf = Vec::new();
        let mut chunk = [0_u8; 1024];
        loop {
            let n = stream.read(&mut chunk).await.unwrap();
            if n == 0 {
                break;
            }
            buf.extend_from_slice(&chunk[..n]);
            let text = String::from_utf8_lossy(&buf);
            if let Some(end) = text.find("\r\n\r\n") {
                let content_length = text[..end]
                    .lines()
                    .find_map(|line| {
                        let (name, value) = line.split_once(':')?;
                        name.eq_ignore_ascii_case("content-length")
                            .then(|| value.trim().parse::<usize>().ok())
                            .flatten()
                    })
                    .unwrap_or(0);
                if buf.len() >= end + 4 + content_length {
                    break;
                }
            }
        }
        String::from_utf8(buf).unwrap()
    }

    fn request_body(request: &str) -> serde_json::Value {
        let (_, body) = request.split_once("\r\n\r\n").unwrap();
        serde_json::from_str(body).unwrap()
    }

    fn filled() -> FormInput {
        FormInput {
            sqft: "1200".into(),
            bedrooms: "2".into(),
            bathrooms: "2".into(),
            location: "Whitefield".into(),
        }
    }

    #[test]
    fn trailing_slash_trimmed() {
        let api = HttpEstimator::new("http://localhost:5000/").unwrap();
        assert_eq!(api.base_url(), "http://localhost:5000");
        assert_eq!(api.url("predict"), "http://localhost:5000/predict");
    }

    #[tokio::test]
    async fn locations_are_fetched_with_get() {
        let (base, server) =
            serve_once("200 OK", r#"{"locations": ["Whitefield", "Koramangala"]}"#).await;
        let api = HttpEstimator::new(base).unwrap();

        let locations = api.locations().await.unwrap();
        assert_eq!(locations, vec!["Whitefield", "Koramangala"]);

        let request = server.await.unwrap();
        assert!(request.starts_with("GET /locations "), "{request}");
    }

    #[tokio::test]
    async fn locations_with_wrong_shape_are_malformed() {
        let (base, _server) = serve_once("200 OK", r#"{"places": []}"#).await;
        let api = HttpEstimator::new(base).unwrap();

        let err = api.locations().await.unwrap_err();
        assert!(matches!(err, ApiError::MalformedResponse { .. }), "{err:?}");
    }

    #[tokio::test]
    async fn predict_posts_form_as_json() {
        let (base, server) = serve_once(
            "200 OK",
            r#"{"price": 7850000.4, "confidence": 91.23, "r2Score": 0.8734,
                "mse": 152345.7, "priceRange": {"low": 7200000, "high": 8500000},
                "currency": "INR"}"#,
        )
        .await;
        let api = HttpEstimator::new(base).unwrap();

        let estimate = api.predict(&filled()).await.unwrap();
        assert_eq!(
            estimate,
            Estimate {
                price: 7850000.4,
                confidence: 91.23,
                r2_score: 0.8734,
                mse: 152345.7,
                price_range: EstimateRange {
                    low: 7200000.0,
                    high: 8500000.0,
                },
            }
        );

        let request = server.await.unwrap();
        assert!(request.starts_with("POST /predict "), "{request}");
        assert!(
            request
                .to_ascii_lowercase()
                .contains("content-type: application/json"),
            "{request}"
        );
        assert_eq!(
            request_body(&request),
            serde_json::json!({
                "sqft": "1200",
                "bedrooms": "2",
                "bathrooms": "2",
                "location": "Whitefield",
            })
        );
    }

    #[tokio::test]
    async fn predict_missing_field_is_malformed() {
        let (base, _server) = serve_once(
            "200 OK",
            r#"{"price": 1.0, "confidence": 2.0, "mse": 3.0, "priceRange": {"low": 0, "high": 2}}"#,
        )
        .await;
        let api = HttpEstimator::new(base).unwrap();

        let err = api.predict(&filled()).await.unwrap_err();
        assert!(matches!(err, ApiError::MalformedResponse { .. }), "{err:?}");
    }

    #[tokio::test]
    async fn error_status_carries_service_message() {
        let (base, _server) =
            serve_once("400 Bad Request", r#"{"error": "could not convert string to float"}"#)
                .await;
        let api = HttpEstimator::new(base).unwrap();

        match api.predict(&filled()).await.unwrap_err() {
            ApiError::Status {
                status, message, ..
            } => {
                assert_eq!(status, 400);
                assert_eq!(message, "could not convert string to float");
            }
            other => panic!("expected Status, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn error_status_without_json_keeps_raw_body() {
        let (base, _server) = serve_once("500 Internal Server Error", "boom").await;
        let api = HttpEstimator::new(base).unwrap();

        match api.locations().await.unwrap_err() {
            ApiError::Status {
                status, message, ..
            } => {
                assert_eq!(status, 500);
                assert_eq!(message, "boom");
            }
            other => panic!("expected Status, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn unreachable_service_is_request_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        let api = HttpEstimator::new(format!("http://{addr}")).unwrap();

        let err = api.predict(&filled()).await.unwrap_err();
        assert!(matches!(err, ApiError::Request { .. }), "{err:?}");
    }
}
