use once_cell::sync::Lazy;
use serde_json::Value;

pub(super) const PHRASE_ENDPOINT: &str = "api/supportive-phrase/";

// The server has gone through a few phrase providers; accept every field
// name any of them used.
const PHRASE_FIELDS: [&str; 4] = ["phrase", "quote", "text", "q"];
const ATTRIBUTION_FIELDS: [&str; 3] = ["author", "attribution", "a"];

/// Shown whenever the endpoint is unreachable or its payload is unusable.
pub static FALLBACK_PHRASE: Lazy<SupportivePhrase> = Lazy::new(|| SupportivePhrase {
    text: "You are doing better than you think.".to_owned(),
    attribution: None,
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupportivePhrase {
    pub text: String,
    pub attribution: Option<String>,
}

impl std::fmt::Display for SupportivePhrase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "\"{}\"", self.text)?;
        if let Some(attribution) = &self.attribution {
            write!(f, " ({attribution})")?;
        }
        Ok(())
    }
}

pub(super) fn parse_phrase_response(body: &str) -> SupportivePhrase {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|payload| parse_payload(&payload))
        .unwrap_or_else(|| {
            log::debug!("supportive phrase response had no usable phrase, using the fallback");
            FALLBACK_PHRASE.clone()
        })
}

fn parse_payload(payload: &Value) -> Option<SupportivePhrase> {
    let text = PHRASE_FIELDS.iter().find_map(|field| non_empty_str(payload, field))?;
    let attribution = ATTRIBUTION_FIELDS.iter().find_map(|field| non_empty_str(payload, field));
    Some(SupportivePhrase { text, attribution })
}

fn non_empty_str(payload: &Value, field: &str) -> Option<String> {
    payload.get(field)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_owned)
}
