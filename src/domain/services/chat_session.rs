#[cfg(test)]
#[path = "chat_session_test.rs"]
mod tests;

use std::collections::BTreeSet;

use rand::Rng;
use tokio::sync::broadcast;

use crate::domain::models::Author;
use crate::domain::models::ChatError;
use crate::domain::models::Message;
use crate::domain::models::MessageId;
use crate::domain::models::Notification;
use crate::domain::models::PendingReply;
use crate::domain::models::ReplyTicket;
use crate::domain::models::ReplyTiming;
use crate::domain::models::RngBox;
use crate::domain::models::RngStrategy;
use crate::domain::models::SessionId;
use crate::domain::models::BOT_RESPONSES;
use crate::domain::models::WELCOME_MESSAGE;

const NOTIFICATION_CAPACITY: usize = 16;

/// Append-only chat log with a canned-response bot.
///
/// Every accepted user message yields a [`PendingReply`]. The owner of the
/// session is responsible for waiting out its delay and then calling
/// [`ChatSession::complete_reply`]. Submitting starts the typing indicator and
/// every delivered reply stops it, even when other replies are still pending.
pub struct ChatSession {
    id: SessionId,
    messages: Vec<Message>,
    pending: BTreeSet<ReplyTicket>,
    is_typing: bool,
    next_message_id: u64,
    next_ticket: u64,
    rng: RngBox,
    timing: ReplyTiming,
    notifications: broadcast::Sender<Notification>,
}

impl ChatSession {
    pub fn new(timing: ReplyTiming, rng_strategy: RngStrategy) -> ChatSession {
        let (notifications, _) = broadcast::channel(NOTIFICATION_CAPACITY);
        let mut session = ChatSession {
            id: SessionId::create(),
            messages: vec![],
            pending: BTreeSet::new(),
            is_typing: false,
            next_message_id: 0,
            next_ticket: 0,
            rng: rng_strategy.build(),
            timing,
            notifications,
        };

        session.append(Author::Bot, WELCOME_MESSAGE);
        tracing::debug!(
            session_id = session.id.as_str(),
            ?rng_strategy,
            delay_min_ms = timing.min().as_millis() as u64,
            delay_max_ms = timing.max().as_millis() as u64,
            "session created"
        );

        return session;
    }

    pub fn id(&self) -> &SessionId {
        return &self.id;
    }

    pub fn messages(&self) -> &[Message] {
        return &self.messages;
    }

    pub fn is_typing(&self) -> bool {
        return self.is_typing;
    }

    pub fn pending_replies(&self) -> usize {
        return self.pending.len();
    }

    pub fn subscribe(&self) -> broadcast::Receiver<Notification> {
        return self.notifications.subscribe();
    }

    pub fn submit_user_message(&mut self, text: &str) -> Result<PendingReply, ChatError> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(ChatError::InvalidInput);
        }

        self.append(Author::User, trimmed);

        let ticket = ReplyTicket::new(self.next_ticket);
        self.next_ticket += 1;
        self.pending.insert(ticket);
        self.is_typing = true;

        let delay = self.timing.sample(&mut self.rng);
        tracing::debug!(
            session_id = self.id.as_str(),
            %ticket,
            delay_ms = delay.as_millis() as u64,
            "reply scheduled"
        );

        return Ok(PendingReply { ticket, delay });
    }

    pub fn complete_reply(&mut self, ticket: ReplyTicket) -> Result<&Message, ChatError> {
        if !self.pending.remove(&ticket) {
            return Err(ChatError::UnknownReply(ticket));
        }

        let text = BOT_RESPONSES[self.rng.gen_range(0..BOT_RESPONSES.len())];
        let message_id = self.append(Author::Bot, text);
        self.is_typing = false;

        // Errors only when nobody is subscribed.
        let _ = self
            .notifications
            .send(Notification::ReplyDelivered { message_id });

        tracing::debug!(
            session_id = self.id.as_str(),
            %ticket,
            %message_id,
            pending = self.pending.len(),
            "reply delivered"
        );

        return Ok(&self.messages[self.messages.len() - 1]);
    }

    fn append(&mut self, author: Author, text: &str) -> MessageId {
        let id = MessageId::new(self.next_message_id);
        self.next_message_id += 1;
        self.messages.push(Message::new(id, author, text));

        return id;
    }
}
