// Chat service - user message, backend reply, formatted once
use crate::application::backend_gateway::BackendGateway;
use crate::application::html::escape_html;
use crate::application::markup_formatter::format_reply;
use crate::domain::chat::{ChatMessage, ChatRole};
use serde::Serialize;
use std::sync::Arc;

pub const CHAT_FAILURE_NOTICE: &str = "Error connecting to AI.";

/// User entry; the input is trimmed and blank input is rejected. Shown escaped, never formatted.
pub fn user_message(text: &str) -> Option<ChatMessage> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    Some(ChatMessage {
        role: ChatRole::User,
        raw_text: text.to_string(),
        formatted_markup: escape_html(text),
    })
}

pub fn bot_reply(reply: Option<&str>) -> ChatMessage {
    ChatMessage {
        role: ChatRole::Bot,
        raw_text: reply.unwrap_or_default().to_string(),
        formatted_markup: format_reply(reply),
    }
}

/// Bot-side notice shown verbatim (escaped, never formatted)
pub fn bot_notice(text: &str) -> ChatMessage {
    ChatMessage {
        role: ChatRole::Bot,
        raw_text: text.to_string(),
        formatted_markup: escape_html(text),
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatExchange {
    pub user: ChatMessage,
    pub bot: ChatMessage,
}

#[derive(Clone)]
pub struct ChatService {
    gateway: Arc<dyn BackendGateway>,
}

impl ChatService {
    pub fn new(gateway: Arc<dyn BackendGateway>) -> Self {
        Self { gateway }
    }

    /// Returns `None` for blank input; nothing is sent in that case
    pub async fn send(&self, text: &str) -> Option<ChatExchange> {
        let user = user_message(text)?;

        let bot = match self.gateway.chat(&user.raw_text).await {
            Ok(reply) => bot_reply(reply.as_deref()),
            Err(e) => {
                tracing::warn!("Chat request failed: {}", e);
                bot_notice(CHAT_FAILURE_NOTICE)
            }
        };

        Some(ChatExchange { user, bot })
    }
}
