use tracing::{debug, instrument};

#[instrument(level = "debug")]
pub async fn get() -> &'static str {
    debug!("health");
    "ok"
}
