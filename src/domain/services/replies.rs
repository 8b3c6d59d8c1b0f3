#[cfg(test)]
#[path = "replies_test.rs"]
mod tests;

use dashmap::DashMap;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time;

use crate::domain::models::Event;
use crate::domain::models::PendingReply;
use crate::domain::models::ReplyTicket;
use crate::domain::models::SessionId;

/// Timers for replies that have been promised but not yet delivered.
///
/// Each pending reply is its own task which sleeps out the reply delay and
/// then announces `Event::ReplyDue`. Tasks are never aborted, so a reply still
/// in flight when the process exits is lost.
#[derive(Default)]
pub struct ReplyScheduler {
    handles: DashMap<(SessionId, ReplyTicket), JoinHandle<()>>,
}

impl ReplyScheduler {
    pub fn schedule(
        &self,
        session_id: SessionId,
        pending: PendingReply,
        tx: &mpsc::UnboundedSender<Event>,
    ) {
        let worker_tx = tx.clone();
        let worker_session_id = session_id.clone();

        let handle = tokio::spawn(async move {
            time::sleep(pending.delay).await;

            if let Err(err) = worker_tx.send(Event::ReplyDue(worker_session_id, pending.ticket)) {
                tracing::warn!(%err, "reply timer fired after the UI went away");
            }
        });

        self.handles.insert((session_id, pending.ticket), handle);
    }

    /// Forgets the timer for a reply the session has applied. Returns false if
    /// the reply was not tracked.
    pub fn finish(&self, session_id: &SessionId, ticket: ReplyTicket) -> bool {
        return self
            .handles
            .remove(&(session_id.clone(), ticket))
            .is_some();
    }

    pub fn pending(&self, session_id: &SessionId) -> usize {
        return self
            .handles
            .iter()
            .filter(|entry| return entry.key().0 == *session_id)
            .count();
    }
}
