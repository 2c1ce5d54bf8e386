pub mod intent;
pub mod models;
pub mod responder;
pub mod responses;

pub use intent::{classify_intent, intent_keywords, normalize_text, IntentMatch, INTENT_TABLE};
pub use models::*;
pub use responder::{preview, respond, respond_with_details, KeywordResponder, Responder};
pub use responses::{fallback_response, response_for, unavailable_message, welcome_message};
