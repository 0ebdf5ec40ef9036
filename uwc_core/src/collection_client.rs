//! This client fetches the unified waste-collection schedule for a UPRN and
//! normalizes it into [`CollectionSchedule`].

use std::time::Duration;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer};

use crate::waste_type::label_for;

static TIMEOUT: Duration = Duration::from_secs(30);

/// Errors produced by [`get`].
///
/// The `Display` strings are the contract the request handlers put into
/// response bodies, so changing them is a breaking change.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// No UPRN was supplied; detected before any network I/O.
    #[error("UPRN not configured")]
    UprnNotConfigured,
    /// The upstream API answered with a non-success status.
    #[error("{status} - {reason}")]
    UpstreamStatus { status: u16, reason: String },
    /// The transport layer failed (timeout, DNS, connection refused, ...).
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}

/// One normalized collection date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionEntry {
    pub date: NaiveDate,
    /// The upstream type code, kept verbatim for the event identifiers.
    pub raw_type: Option<String>,
    /// Display label from the type-mapping table.
    pub label: &'static str,
}

/// The normalized schedule for one property, entries in upstream order.
#[derive(Debug, Clone)]
pub struct CollectionSchedule {
    pub uprn: String,
    pub entries: Vec<CollectionEntry>,
}

/// Build the outbound HTTP client with the 30 second timeout policy.
pub fn http_client() -> reqwest::Result<reqwest::Client> {
    reqwest::Client::builder().timeout(TIMEOUT).build()
}

/// Fetch and normalize the collection schedule for a UPRN.
///
/// A body that does not deserialize, or deserializes without collection
/// items, is a successful empty schedule: the upstream API reports "no
/// items" that way.
pub async fn get(
    client: &reqwest::Client,
    base_url: &str,
    uprn: Option<&str>,
) -> Result<CollectionSchedule, FetchError> {
    let uprn = match uprn.map(str::trim).filter(|uprn| !uprn.is_empty()) {
        Some(uprn) => uprn,
        None => {
            tracing::error!("no UPRN configured, skipping upstream request");
            return Err(FetchError::UprnNotConfigured);
        }
    };
    let url = format!("{base_url}/unified-waste-collections/{uprn}");
    let response = client.get(&url).send().await.map_err(|err| {
        tracing::error!(error = %err, %url, "waste collection request failed");
        FetchError::from(err)
    })?;
    let status = response.status();
    if !status.is_success() {
        let reason = String::from(status.canonical_reason().unwrap_or("Unknown"));
        tracing::error!(status = status.as_u16(), %reason, "upstream returned non-success status");
        return Err(FetchError::UpstreamStatus {
            status: status.as_u16(),
            reason,
        });
    }
    let body = response.text().await.map_err(|err| {
        tracing::error!(error = %err, "failed to read upstream response body");
        FetchError::from(err)
    })?;
    Ok(CollectionSchedule {
        uprn: String::from(uprn),
        entries: parse(&body),
    })
}

/// Parse the upstream payload into normalized entries, upstream order kept.
fn parse(body: &str) -> Vec<CollectionEntry> {
    let response: WasteCollectionResponse = match serde_json::from_str(body) {
        Ok(response) => response,
        Err(_) => return Vec::new(),
    };
    response
        .collection_items
        .unwrap_or_default()
        .into_iter()
        .map(|item| {
            let label = label_for(item.collection_type.as_deref());
            CollectionEntry {
                date: item.date,
                raw_type: item.collection_type,
                label,
            }
        })
        .collect()
}

/// The upstream response shape; aliases cover the Pascal-case spellings the
/// .NET serializer behind the API may emit.
#[derive(Debug, Deserialize)]
struct WasteCollectionResponse {
    #[serde(default, rename = "collectionItems", alias = "CollectionItems")]
    collection_items: Option<Vec<RawCollectionItem>>,
}

#[derive(Debug, Deserialize)]
struct RawCollectionItem {
    #[serde(alias = "Date", deserialize_with = "deserialize_collection_date")]
    date: NaiveDate,
    #[serde(default, rename = "type", alias = "Type")]
    collection_type: Option<String>,
}

/// Accept both plain dates and the ISO date-time form, keeping only the
/// calendar date.
fn deserialize_collection_date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    NaiveDate::parse_from_str(&raw, "%Y-%m-%d")
        .or_else(|_| {
            NaiveDateTime::parse_from_str(&raw, "%Y-%m-%dT%H:%M:%S%.f")
                .map(|date_time| date_time.date())
        })
        .map_err(serde::de::Error::custom)
}
