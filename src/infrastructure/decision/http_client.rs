//! HTTP-backed decision service client.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::service::{DecisionError, DecisionResult, DecisionService};
use crate::domain::{Decision, DenyReason, RequestContext, SlidingWindowRule};

/// Client for a remote decision service.
///
/// Posts the per-request rule plus request metadata to
/// `{base_url}/v1/decisions` and maps the classified verdict onto
/// [`Decision`]. No retries and no client-side timeout: the service is
/// expected to bound its own latency, and a single failed evaluation is
/// terminal for the request.
pub struct HttpDecisionClient {
    http: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl HttpDecisionClient {
    /// Creates a client for the decision service at `base_url`.
    ///
    /// # Arguments
    ///
    /// - `base_url` - service root, e.g. `"https://decide.example.com"`;
    ///   a trailing slash is tolerated
    /// - `api_key` - optional bearer credential sent on every evaluation
    ///
    /// # Errors
    ///
    /// Returns [`DecisionError::Transport`] if the underlying HTTP client
    /// cannot be constructed.
    pub fn new(base_url: impl Into<String>, api_key: Option<String>) -> DecisionResult<Self> {
        let http = reqwest::Client::builder().build()?;

        let base_url = base_url.into().trim_end_matches('/').to_string();
        info!("Decision service client configured for {}", base_url);

        Ok(Self {
            http,
            base_url,
            api_key,
        })
    }

    fn decisions_url(&self) -> String {
        format!("{}/v1/decisions", self.base_url)
    }
}

/// Evaluation request sent to the decision service.
#[derive(Serialize)]
struct DecideRequest<'a> {
    rule: &'a SlidingWindowRule,
    request: &'a RequestContext,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "snake_case")]
enum Conclusion {
    Allow,
    Deny,
}

/// Verdict returned by the decision service.
///
/// `reason` is kept as a raw string: the service may grow deny reasons this
/// layer does not enforce, and those must fall through to the allow path.
#[derive(Debug, Deserialize)]
struct DecideResponse {
    conclusion: Conclusion,
    #[serde(default)]
    reason: Option<String>,
}

impl DecideResponse {
    fn into_decision(self) -> Decision {
        match self.conclusion {
            Conclusion::Allow => Decision::Allow,
            Conclusion::Deny => match self.reason.as_deref() {
                Some("bot") => Decision::Deny(DenyReason::Bot),
                Some("shield") => Decision::Deny(DenyReason::Shield),
                Some("rate_limit") => Decision::Deny(DenyReason::RateLimit),
                other => {
                    // Denied for none of the enforced reasons: forward.
                    debug!("Decision denied for unenforced reason {:?}", other);
                    Decision::Allow
                }
            },
        }
    }
}

#[async_trait]
impl DecisionService for HttpDecisionClient {
    async fn evaluate(
        &self,
        rule: &SlidingWindowRule,
        request: &RequestContext,
    ) -> DecisionResult<Decision> {
        let body = DecideRequest { rule, request };

        let mut req = self.http.post(self.decisions_url()).json(&body);
        if let Some(key) = &self.api_key {
            req = req.bearer_auth(key);
        }

        let response = req.send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(DecisionError::Protocol(format!(
                "decision service returned {}",
                status
            )));
        }

        let verdict: DecideResponse = response
            .json()
            .await
            .map_err(|e| DecisionError::Protocol(format!("malformed decision body: {e}")))?;

        Ok(verdict.into_decision())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deny(reason: Option<&str>) -> DecideResponse {
        DecideResponse {
            conclusion: Conclusion::Deny,
            reason: reason.map(String::from),
        }
    }

    #[test]
    fn test_allow_conclusion() {
        let verdict = DecideResponse {
            conclusion: Conclusion::Allow,
            reason: None,
        };
        assert_eq!(verdict.into_decision(), Decision::Allow);
    }

    #[test]
    fn test_deny_reasons_map_onto_decision() {
        assert_eq!(
            deny(Some("bot")).into_decision(),
            Decision::Deny(DenyReason::Bot)
        );
        assert_eq!(
            deny(Some("shield")).into_decision(),
            Decision::Deny(DenyReason::Shield)
        );
        assert_eq!(
            deny(Some("rate_limit")).into_decision(),
            Decision::Deny(DenyReason::RateLimit)
        );
    }

    #[test]
    fn test_unenforced_deny_reason_forwards() {
        assert_eq!(deny(Some("geo_block")).into_decision(), Decision::Allow);
        assert_eq!(deny(None).into_decision(), Decision::Allow);
    }

    #[test]
    fn test_verdict_parsing() {
        let verdict: DecideResponse =
            serde_json::from_str(r#"{"conclusion":"deny","reason":"rate_limit"}"#).unwrap();
        assert_eq!(
            verdict.into_decision(),
            Decision::Deny(DenyReason::RateLimit)
        );

        let verdict: DecideResponse = serde_json::from_str(r#"{"conclusion":"allow"}"#).unwrap();
        assert_eq!(verdict.into_decision(), Decision::Allow);
    }

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let client = HttpDecisionClient::new("https://decide.example.com/", None).unwrap();
        assert_eq!(
            client.decisions_url(),
            "https://decide.example.com/v1/decisions"
        );
    }
}
