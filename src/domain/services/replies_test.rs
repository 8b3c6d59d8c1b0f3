use std::time::Duration;

use anyhow::bail;
use anyhow::Result;
use tokio::sync::mpsc;
use tokio::time::Instant;

use super::ReplyScheduler;
use crate::domain::models::Event;
use crate::domain::models::PendingReply;
use crate::domain::models::ReplyTicket;
use crate::domain::models::SessionId;

fn pending(ticket: u64, millis: u64) -> PendingReply {
    return PendingReply {
        ticket: ReplyTicket::new(ticket),
        delay: Duration::from_millis(millis),
    };
}

#[tokio::test(start_paused = true)]
async fn it_fires_after_the_delay() -> Result<()> {
    let (tx, mut rx) = mpsc::unbounded_channel::<Event>();
    let scheduler = ReplyScheduler::default();
    let session_id = SessionId::create();

    let start = Instant::now();
    scheduler.schedule(session_id.clone(), pending(0, 1500), &tx);
    assert_eq!(scheduler.pending(&session_id), 1);

    match rx.recv().await {
        Some(Event::ReplyDue(due_session_id, ticket)) => {
            assert_eq!(due_session_id, session_id);
            assert_eq!(ticket, ReplyTicket::new(0));
        }
        _ => bail!("Wrong enum"),
    }
    assert!(start.elapsed() >= Duration::from_millis(1500));

    return Ok(());
}

#[tokio::test(start_paused = true)]
async fn it_fires_in_completion_order() -> Result<()> {
    let (tx, mut rx) = mpsc::unbounded_channel::<Event>();
    let scheduler = ReplyScheduler::default();
    let session_id = SessionId::create();

    scheduler.schedule(session_id.clone(), pending(0, 2900), &tx);
    scheduler.schedule(session_id.clone(), pending(1, 1100), &tx);

    let mut tickets = vec![];
    for _ in 0..2 {
        match rx.recv().await {
            Some(Event::ReplyDue(_, ticket)) => tickets.push(ticket),
            _ => bail!("Wrong enum"),
        }
    }

    assert_eq!(tickets, vec![ReplyTicket::new(1), ReplyTicket::new(0)]);
    return Ok(());
}

#[tokio::test(start_paused = true)]
async fn it_finishes_tracked_replies_only() {
    let (tx, _rx) = mpsc::unbounded_channel::<Event>();
    let scheduler = ReplyScheduler::default();
    let session_id = SessionId::create();
    let other_session_id = SessionId::create();

    scheduler.schedule(session_id.clone(), pending(0, 1000), &tx);
    scheduler.schedule(other_session_id.clone(), pending(0, 1000), &tx);

    assert!(scheduler.finish(&session_id, ReplyTicket::new(0)));
    assert!(!scheduler.finish(&session_id, ReplyTicket::new(0)));
    assert_eq!(scheduler.pending(&session_id), 0);
    assert_eq!(scheduler.pending(&other_session_id), 1);
}
