use std::sync::Arc;
use std::time::Instant;

use folio_core::{
    preview, welcome_message, ChatInput, ChatReply, KeywordResponder, Locale, Responder,
};
use folio_observability::AppMetrics;
use tracing::{debug, info, instrument};

const LOG_PREVIEW_GRAPHEMES: usize = 48;

#[derive(Clone)]
pub struct ChatAssistant<R = KeywordResponder>
where
    R: Responder,
{
    responder: R,
    metrics: Arc<AppMetrics>,
}

impl ChatAssistant<KeywordResponder> {
    pub fn keyword(metrics: Arc<AppMetrics>) -> Self {
        Self::new(KeywordResponder, metrics)
    }
}

impl<R> ChatAssistant<R>
where
    R: Responder,
{
    pub fn new(responder: R, metrics: Arc<AppMetrics>) -> Self {
        Self { responder, metrics }
    }

    pub fn metrics(&self) -> &Arc<AppMetrics> {
        &self.metrics
    }

    #[instrument(skip(self, input), fields(locale = input.locale.as_deref().unwrap_or("")))]
    pub fn handle_chat(&self, input: &ChatInput) -> ChatReply {
        let started = Instant::now();
        self.metrics.inc_request();

        let reply = self.responder.reply(input);

        match reply.intent {
            Some(intent) => self.metrics.record_intent(intent.as_str()),
            None => self.metrics.inc_fallback(),
        }
        self.metrics.observe_latency(started.elapsed());

        info!(
            resolved_locale = %reply.locale,
            intent = reply.intent.map(|intent| intent.as_str()).unwrap_or("fallback"),
            keyword = reply.matched_keyword.as_deref().unwrap_or(""),
            "chat reply composed"
        );
        debug!(message = %preview(&input.message, LOG_PREVIEW_GRAPHEMES), "chat message");

        reply
    }

    pub fn welcome(&self, locale: Locale) -> &'static str {
        welcome_message(locale)
    }
}
