use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use url::Url;
use uuid::Uuid;

/// A single pageview, derived entirely from the inbound request
/// headers and the wall clock at capture time. Built fresh per request,
/// logged once, then discarded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pageview {
    pub id: String,
    pub date: String,
    pub timestamp: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hostname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pathname: Option<String>,
    pub production: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_ip: Option<String>,
}

impl Pageview {
    /// Capture a pageview at the current instant.
    ///
    /// A referrer that does not parse as an absolute URL leaves
    /// `hostname` and `pathname` unset; the record is still produced.
    pub fn capture(
        url: Option<String>,
        user_agent: Option<String>,
        client_ip: Option<String>,
        production_host: &str,
    ) -> Self {
        let parsed = url.as_deref().and_then(|raw| Url::parse(raw).ok());
        let hostname = parsed
            .as_ref()
            .and_then(|u| u.host_str().map(String::from));
        let pathname = parsed.as_ref().map(|u| u.path().to_string());
        let production = hostname.as_deref() == Some(production_host);

        let timestamp = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
        let date = timestamp[..10].to_string();

        Self {
            id: Uuid::new_v4().to_string(),
            date,
            timestamp,
            url,
            hostname,
            pathname,
            production,
            user_agent,
            client_ip,
        }
    }
}
