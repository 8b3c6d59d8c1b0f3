use std::time::Duration;

use anyhow::bail;
use anyhow::Result;
use tokio::sync::mpsc;
use tokio::time::Instant;

use super::help_text;
use super::ActionsService;
use crate::domain::models::Action;
use crate::domain::models::Event;
use crate::domain::models::PendingReply;
use crate::domain::models::ReplyTicket;
use crate::domain::models::SessionId;

#[tokio::test(start_paused = true)]
async fn it_schedules_replies() -> Result<()> {
    let (action_tx, mut action_rx) = mpsc::unbounded_channel::<Action>();
    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<Event>();
    let worker = tokio::spawn(async move {
        return ActionsService::start(event_tx, &mut action_rx).await;
    });

    let session_id = SessionId::create();
    let start = Instant::now();
    action_tx.send(Action::ScheduleReply(
        session_id.clone(),
        PendingReply {
            ticket: ReplyTicket::new(4),
            delay: Duration::from_millis(2000),
        },
    ))?;

    match event_rx.recv().await {
        Some(Event::ReplyDue(due_session_id, ticket)) => {
            assert_eq!(due_session_id, session_id);
            assert_eq!(ticket, ReplyTicket::new(4));
        }
        _ => bail!("Wrong enum"),
    }
    assert!(start.elapsed() >= Duration::from_millis(2000));

    action_tx.send(Action::ReplyApplied(session_id, ReplyTicket::new(4)))?;
    drop(action_tx);
    worker.await??;

    return Ok(());
}

#[tokio::test]
async fn it_stops_when_actions_close() -> Result<()> {
    let (action_tx, mut action_rx) = mpsc::unbounded_channel::<Action>();
    let (event_tx, _event_rx) = mpsc::unbounded_channel::<Event>();
    drop(action_tx);

    ActionsService::start(event_tx, &mut action_rx).await?;
    return Ok(());
}

#[test]
fn it_lists_hotkeys() {
    insta::assert_snapshot!(help_text(), @r###"
    HOTKEYS:
    - Enter - Send your message in a bottle
    - ALT+Enter - Start a new line
    - Up arrow - Scroll up
    - Down arrow - Scroll down
    - CTRL+U - Page up
    - CTRL+D - Page down
    - CTRL+C - Exit Ocean Chat
    "###);
}
