use unicode_segmentation::UnicodeSegmentation;

use crate::intent::classify_intent;
use crate::models::{ChatInput, ChatReply, Locale};
use crate::responses::{fallback_response, response_for};

pub trait Responder: Send + Sync {
    fn reply(&self, input: &ChatInput) -> ChatReply;
}

/// Stateless; the tables it reads are compiled in.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordResponder;

impl Responder for KeywordResponder {
    fn reply(&self, input: &ChatInput) -> ChatReply {
        let locale = Locale::from_optional_str(input.locale.as_deref());
        respond_with_details(&input.message, locale)
    }
}

pub fn respond(message: &str, locale: Locale) -> String {
    respond_with_details(message, locale).response
}

pub fn respond_with_details(message: &str, locale: Locale) -> ChatReply {
    match classify_intent(message) {
        Some(hit) => ChatReply {
            response: response_for(hit.intent, locale).to_string(),
            intent: Some(hit.intent),
            locale,
            matched_keyword: Some(hit.keyword.to_string()),
        },
        None => ChatReply {
            response: fallback_response(locale).to_string(),
            intent: None,
            locale,
            matched_keyword: None,
        },
    }
}

/// Truncates on grapheme boundaries so combining marks in Devanagari and
/// Odia stay attached to their base letter.
pub fn preview(text: &str, max_graphemes: usize) -> String {
    let mut graphemes = text.graphemes(true);
    let head = graphemes.by_ref().take(max_graphemes).collect::<String>();
    if graphemes.next().is_some() {
        format!("{head}…")
    } else {
        head
    }
}
