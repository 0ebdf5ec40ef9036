use std::sync::Arc;

use axum::{
    extract::State,
    http::{
        header::{CACHE_CONTROL, CONTENT_DISPOSITION, CONTENT_TYPE},
        HeaderName, StatusCode,
    },
    response::{IntoResponse, Response},
};
use uwc_core::{calendar, collection_client, text};

use crate::AppState;

static CONTENT_TYPE_VALUE: &str = "text/calendar; charset=utf-8";
static CONTENT_DISPOSITION_VALUE: &str = "inline; filename=waste-collection.ics";
// One week, matching the calendar's REFRESH-INTERVAL.
static CACHE_CONTROL_VALUE: &str = "public, max-age=604800";
static RELCALID_HEADER: &str = "x-wr-relcalid";
static RELCALID_FALLBACK: &str = "waste-collection";

/// Handle iCalendar feed requests.
pub async fn handler(State(state): State<Arc<AppState>>) -> Result<Response, (StatusCode, String)> {
    let schedule = collection_client::get(
        &state.client,
        &state.config.base_url,
        state.config.uprn.as_deref(),
    )
    .await
    .map_err(|err| (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()))?;
    if schedule.entries.is_empty() {
        return Err((StatusCode::NOT_FOUND, String::from(text::NO_ITEMS_MESSAGE)));
    }
    let relcalid = state
        .config
        .uprn
        .clone()
        .unwrap_or_else(|| String::from(RELCALID_FALLBACK));
    let response = (
        [
            (CONTENT_TYPE, String::from(CONTENT_TYPE_VALUE)),
            (CONTENT_DISPOSITION, String::from(CONTENT_DISPOSITION_VALUE)),
            (CACHE_CONTROL, String::from(CACHE_CONTROL_VALUE)),
            (HeaderName::from_static(RELCALID_HEADER), relcalid),
        ],
        calendar::render(&schedule),
    )
        .into_response();
    Ok(response)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{extract::State, http::StatusCode};
    use httpmock::prelude::*;
    use uwc_core::{collection_client, config::Config};

    use crate::AppState;

    use super::handler;

    fn state(server: &MockServer, uprn: Option<&str>) -> Arc<AppState> {
        Arc::new(AppState {
            client: collection_client::http_client().unwrap(),
            config: Config {
                uprn: uprn.map(String::from),
                base_url: server.base_url(),
            },
        })
    }

    #[tokio::test]
    async fn test_handler_end_to_end() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/unified-waste-collections/100120000001");
                then.status(200)
                    .header("content-type", "application/json")
                    .body(r#"{"collectionItems":[{"date":"2024-03-15","type":"refuse"}]}"#);
            })
            .await;
        let response = handler(State(state(&server, Some("100120000001"))))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let headers = response.headers();
        assert_eq!(
            headers.get("content-type").unwrap(),
            "text/calendar; charset=utf-8"
        );
        assert_eq!(
            headers.get("content-disposition").unwrap(),
            "inline; filename=waste-collection.ics"
        );
        assert_eq!(
            headers.get("cache-control").unwrap(),
            "public, max-age=604800"
        );
        assert_eq!(headers.get("x-wr-relcalid").unwrap(), "100120000001");
        let body = hyper::body::to_bytes(response.into_body()).await.unwrap();
        let ics = String::from_utf8(body.to_vec()).unwrap();
        assert!(ics.contains("SUMMARY:General Waste Collection"));
        assert!(ics.contains("DTSTART;VALUE=DATE:20240315"));
        assert!(ics.contains("BEGIN:VALARM"));
    }

    #[tokio::test]
    async fn test_handler_upstream_failure_is_server_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/unified-waste-collections/100120000001");
                then.status(404);
            })
            .await;
        let (status, message) = handler(State(state(&server, Some("100120000001"))))
            .await
            .unwrap_err();
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(message.contains("404"));
    }

    #[tokio::test]
    async fn test_handler_empty_schedule_is_not_found() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/unified-waste-collections/100120000001");
                then.status(200)
                    .header("content-type", "application/json")
                    .body("{}");
            })
            .await;
        let (status, _) = handler(State(state(&server, Some("100120000001"))))
            .await
            .unwrap_err();
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
