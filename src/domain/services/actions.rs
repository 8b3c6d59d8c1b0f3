#[cfg(test)]
#[path = "actions_test.rs"]
mod tests;

use anyhow::Result;
use tokio::sync::mpsc;

use super::ReplyScheduler;
use crate::domain::models::Action;
use crate::domain::models::Event;

pub fn help_text() -> String {
    let text = r#"
HOTKEYS:
- Enter - Send your message in a bottle
- ALT+Enter - Start a new line
- Up arrow - Scroll up
- Down arrow - Scroll down
- CTRL+U - Page up
- CTRL+D - Page down
- CTRL+C - Exit Ocean Chat
        "#;

    return text.trim().to_string();
}

pub struct ActionsService {}

impl ActionsService {
    /// Runs until every action sender has been dropped.
    pub async fn start(
        tx: mpsc::UnboundedSender<Event>,
        rx: &mut mpsc::UnboundedReceiver<Action>,
    ) -> Result<()> {
        let scheduler = ReplyScheduler::default();

        while let Some(action) = rx.recv().await {
            match action {
                Action::ScheduleReply(session_id, pending) => {
                    scheduler.schedule(session_id.clone(), pending, &tx);
                    tracing::debug!(
                        session_id = session_id.as_str(),
                        pending = scheduler.pending(&session_id),
                        "reply timer started"
                    );
                }
                Action::ReplyApplied(session_id, ticket) => {
                    if !scheduler.finish(&session_id, ticket) {
                        tracing::warn!(
                            session_id = session_id.as_str(),
                            %ticket,
                            "applied a reply that was never scheduled"
                        );
                    }
                }
            }
        }

        return Ok(());
    }
}
