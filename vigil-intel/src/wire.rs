//! Wire types for the threat match endpoint
//!
//! Mirrors the Safe Browsing v4 `threatMatches:find` request and response
//! bodies. Only the fields the scorer reads are modeled; everything else
//! in a response is ignored.

use serde::{Deserialize, Serialize};

use vigil_core::REMOTE_THREAT_KINDS;

/// Client identification block sent with every request
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientInfo {
    pub client_id: String,
    pub client_version: String,
}

/// A single URL to evaluate
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThreatEntry {
    pub url: String,
}

/// Threat query: which threat kinds to check the entries against
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThreatInfo {
    pub threat_types: Vec<String>,
    pub platform_types: Vec<String>,
    pub threat_entry_types: Vec<String>,
    pub threat_entries: Vec<ThreatEntry>,
}

/// Full lookup request body
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LookupRequest {
    pub client: ClientInfo,
    pub threat_info: ThreatInfo,
}

impl LookupRequest {
    /// Standard single-URL request covering all remote threat kinds
    pub fn for_url(url: &str, client_id: &str, client_version: &str) -> Self {
        Self {
            client: ClientInfo {
                client_id: client_id.to_string(),
                client_version: client_version.to_string(),
            },
            threat_info: ThreatInfo {
                threat_types: REMOTE_THREAT_KINDS
                    .iter()
                    .map(|kind| kind.as_str().to_string())
                    .collect(),
                platform_types: vec!["ANY_PLATFORM".to_string()],
                threat_entry_types: vec!["URL".to_string()],
                threat_entries: vec![ThreatEntry {
                    url: url.to_string(),
                }],
            },
        }
    }
}

/// One provider verdict for a queried URL
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThreatMatch {
    /// Threat classification, e.g. "MALWARE"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub threat_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub threat_entry_type: Option<String>,
    /// The matched entry
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub threat: Option<ThreatEntry>,
}

/// Response body; an absent `matches` field means no verdicts
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LookupResponse {
    #[serde(default)]
    pub matches: Vec<ThreatMatch>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_shape() {
        let request = LookupRequest::for_url("http://bad.example/", "vigil", "0.1.0");
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(json["client"]["clientId"], "vigil");
        assert_eq!(json["client"]["clientVersion"], "0.1.0");
        assert_eq!(
            json["threatInfo"]["threatTypes"],
            serde_json::json!([
                "MALWARE",
                "SOCIAL_ENGINEERING",
                "UNWANTED_SOFTWARE",
                "POTENTIALLY_HARMFUL_APPLICATION"
            ])
        );
        assert_eq!(json["threatInfo"]["platformTypes"], serde_json::json!(["ANY_PLATFORM"]));
        assert_eq!(json["threatInfo"]["threatEntryTypes"], serde_json::json!(["URL"]));
        assert_eq!(
            json["threatInfo"]["threatEntries"][0]["url"],
            "http://bad.example/"
        );
    }

    #[test]
    fn test_response_with_matches() {
        let body = r#"{
            "matches": [
                {"threatType": "MALWARE", "platformType": "ANY_PLATFORM", "threat": {"url": "http://bad.example/"}},
                {"threatType": "SOCIAL_ENGINEERING"}
            ]
        }"#;

        let response: LookupResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.matches.len(), 2);
        assert_eq!(response.matches[0].threat_type.as_deref(), Some("MALWARE"));
        assert_eq!(
            response.matches[1].threat_type.as_deref(),
            Some("SOCIAL_ENGINEERING")
        );
        assert!(response.matches[1].threat.is_none());
    }

    #[test]
    fn test_empty_response_body() {
        let response: LookupResponse = serde_json::from_str("{}").unwrap();
        assert!(response.matches.is_empty());
    }
}
