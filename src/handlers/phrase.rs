use crate::api::SupportApi;
use crate::handlers::{reply, HandlerResult};

/// Fetching never fails: the API collapses every problem into the fixed
/// fallback phrase, so the loop always stays interactive.
pub async fn phrase_cmd_handler(api: &dyn SupportApi) -> HandlerResult {
    let phrase = api.supportive_phrase().await;
    reply(phrase.to_string());
    Ok(())
}
