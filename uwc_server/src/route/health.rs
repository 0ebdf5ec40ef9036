/// Handle health check requests.
pub async fn handler() -> &'static str {
    "OK"
}
