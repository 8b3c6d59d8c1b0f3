#[cfg(test)]
#[path = "app_state_test.rs"]
mod tests;

use std::time::Instant;

use anyhow::Result;
use ratatui::prelude::Rect;
use tokio::sync::broadcast;
use tokio::sync::mpsc;

use super::BubbleList;
use super::ChatSession;
use super::Scroll;
use crate::domain::models::Action;
use crate::domain::models::ChatError;
use crate::domain::models::Notification;
use crate::domain::models::ReplyTicket;
use crate::domain::models::ReplyTiming;
use crate::domain::models::RngStrategy;
use crate::domain::models::SessionId;
use crate::domain::models::Toast;
use crate::domain::models::TypingIndicator;

pub struct AppState {
    pub bubble_list: BubbleList,
    pub last_known_height: u16,
    pub last_known_width: u16,
    pub notifications: broadcast::Receiver<Notification>,
    pub scroll: Scroll,
    pub session: ChatSession,
    pub toast: Option<Toast>,
    pub typing: TypingIndicator,
}

impl AppState {
    pub fn new() -> Result<AppState> {
        let timing = ReplyTiming::from_config()?;
        let rng_strategy = RngStrategy::from_config()?;

        return Ok(AppState::with_session(ChatSession::new(
            timing,
            rng_strategy,
        )));
    }

    pub fn with_session(session: ChatSession) -> AppState {
        let mut app_state = AppState {
            bubble_list: BubbleList::default(),
            last_known_height: 0,
            last_known_width: 0,
            notifications: session.subscribe(),
            scroll: Scroll::default(),
            session,
            toast: None,
            typing: TypingIndicator::default(),
        };
        app_state.sync_dependants();

        return app_state;
    }

    /// Submits whatever is in the input box. Returns false when the text was
    /// blank and nothing was sent, so the caller can keep the input as is.
    pub fn submit(&mut self, text: &str, tx: &mpsc::UnboundedSender<Action>) -> Result<bool> {
        let pending = match self.session.submit_user_message(text) {
            Ok(pending) => pending,
            Err(ChatError::InvalidInput) => return Ok(false),
            Err(err) => return Err(err.into()),
        };

        tx.send(Action::ScheduleReply(self.session.id().clone(), pending))?;
        self.sync_dependants();
        self.scroll.last();

        return Ok(true);
    }

    pub fn handle_reply_due(
        &mut self,
        session_id: SessionId,
        ticket: ReplyTicket,
        tx: &mpsc::UnboundedSender<Action>,
    ) -> Result<()> {
        if &session_id != self.session.id() {
            tracing::warn!(
                session_id = session_id.as_str(),
                %ticket,
                "ignoring reply for another session"
            );
            return Ok(());
        }

        self.session.complete_reply(ticket)?;
        tx.send(Action::ReplyApplied(session_id, ticket))?;

        while let Ok(notification) = self.notifications.try_recv() {
            self.toast = Some(Toast::new(notification.text(), Instant::now()));
        }

        self.sync_dependants();
        self.scroll.last();

        return Ok(());
    }

    pub fn tick(&mut self, now: Instant) {
        if self.session.is_typing() {
            self.typing.advance();
        }

        if let Some(toast) = &self.toast {
            if toast.is_expired(now) {
                self.toast = None;
            }
        }
    }

    pub fn set_rect(&mut self, rect: Rect) {
        self.last_known_width = rect.width;
        self.last_known_height = rect.height;
        self.sync_dependants();
        self.scroll.last();
    }

    fn sync_dependants(&mut self) {
        self.bubble_list
            .set_messages(self.session.messages(), self.last_known_width.into());

        let lines_len = u16::try_from(self.bubble_list.len()).unwrap_or(u16::MAX);
        self.scroll.set_state(lines_len, self.last_known_height);
    }
}
