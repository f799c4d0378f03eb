use crate::error::{CdResult, CubeDeckError};
use crate::notation::{Algorithm, Move};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{error, info};

#[derive(Serialize)]
struct SolveRequest<'a> {
    cube: &'a str,
}

/// The service returns `moves` either as a token list or as one
/// space-joined string; both are accepted, anything else is an
/// invalid-response error at decode time.
#[derive(Deserialize, Debug)]
#[serde(untagged)]
enum MovesField {
    Tokens(Vec<String>),
    Joined(String),
}

#[derive(Deserialize, Debug)]
struct SolveResponse {
    moves: MovesField,
}

#[derive(Deserialize, Debug)]
struct SolveErrorBody {
    error: String,
}

/// Client for the external solving service (`POST {base}/solve` with a
/// `{"cube": "<54-char URFDLB string>"}` body). The facelet string is
/// the one canonical request representation; no retry, no timeout.
pub struct SolverClient {
    client: Client,
    base_url: String,
}

impl SolverClient {
    pub fn new(base_url: impl Into<String>) -> SolverClient {
        SolverClient {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Submit a cube state and return the solution as a parsed
    /// algorithm. Non-success statuses surface the backend's `error`
    /// field when present.
    pub async fn solve(&self, facelets: &str) -> CdResult<Algorithm> {
        let url = format!("{}/solve", self.base_url);
        info!("Requesting solve from {}", url);

        let response = self
            .client
            .post(&url)
            .json(&SolveRequest { cube: facelets })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = match response.json::<SolveErrorBody>().await {
                Ok(body) => body.error,
                Err(_) => format!("Solver returned status {}", status),
            };
            error!("Solve failed: {}", message);
            return Err(CubeDeckError::Solver(message));
        }

        let body: SolveResponse = response
            .json()
            .await
            .map_err(|_| CubeDeckError::Solver("Invalid solver response shape".to_string()))?;

        let moves = parse_moves(body.moves)?;
        info!("Solver returned {} moves", moves.len());
        Ok(moves)
    }
}

fn parse_moves(field: MovesField) -> CdResult<Algorithm> {
    match field {
        MovesField::Tokens(tokens) => {
            let mut moves: Vec<Move> = Vec::with_capacity(tokens.len());
            for token in &tokens {
                moves.push(token.parse()?);
            }
            Ok(Algorithm::from_moves(moves))
        }
        MovesField::Joined(text) => Algorithm::parse(&text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_moves_decode_from_token_list() {
        let body: SolveResponse =
            serde_json::from_str(r#"{ "moves": ["R", "U'", "F2"] }"#).unwrap();
        assert_eq!(parse_moves(body.moves).unwrap().to_string(), "R U' F2");
    }

    #[test]
    fn test_moves_decode_from_joined_string() {
        let body: SolveResponse = serde_json::from_str(r#"{ "moves": "R  U' F2" }"#).unwrap();
        assert_eq!(parse_moves(body.moves).unwrap().to_string(), "R U' F2");
    }

    #[test]
    fn test_other_shapes_rejected() {
        assert!(serde_json::from_str::<SolveResponse>(r#"{ "moves": 7 }"#).is_err());
        assert!(serde_json::from_str::<SolveResponse>(r#"{ "solution": "R" }"#).is_err());

        let body: SolveResponse = serde_json::from_str(r#"{ "moves": ["R", "??"] }"#).unwrap();
        assert!(parse_moves(body.moves).is_err());
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = SolverClient::new("http://127.0.0.1:8000/");
        assert_eq!(client.base_url(), "http://127.0.0.1:8000");
    }
}
