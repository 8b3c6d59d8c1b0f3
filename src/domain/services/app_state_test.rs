use std::time::Duration;
use std::time::Instant;

use anyhow::bail;
use anyhow::Result;
use ratatui::prelude::Rect;
use tokio::sync::mpsc;

use super::AppState;
use crate::domain::models::Action;
use crate::domain::models::Author;
use crate::domain::models::ReplyTicket;
use crate::domain::models::ReplyTiming;
use crate::domain::models::RngStrategy;
use crate::domain::models::SessionId;
use crate::domain::models::Toast;
use crate::domain::services::ChatSession;

impl Default for AppState {
    fn default() -> AppState {
        let mut app_state = AppState::with_session(ChatSession::new(
            ReplyTiming::default(),
            RngStrategy::Seeded(7),
        ));
        app_state.set_rect(Rect::new(0, 0, 100, 20));

        return app_state;
    }
}

fn expect_schedule(rx: &mut mpsc::UnboundedReceiver<Action>) -> Result<ReplyTicket> {
    match rx.try_recv()? {
        Action::ScheduleReply(_session_id, pending) => return Ok(pending.ticket),
        _ => bail!("Wrong enum"),
    }
}

mod submit {
    use super::*;

    #[test]
    fn it_schedules_a_reply() -> Result<()> {
        let (tx, mut rx) = mpsc::unbounded_channel::<Action>();
        let mut app_state = AppState::default();

        assert!(app_state.submit("hello", &tx)?);
        assert!(app_state.session.is_typing());
        assert_eq!(app_state.session.messages().len(), 2);

        match rx.try_recv()? {
            Action::ScheduleReply(session_id, pending) => {
                assert_eq!(&session_id, app_state.session.id());
                assert!(pending.delay >= Duration::from_millis(1000));
            }
            _ => bail!("Wrong enum"),
        }

        return Ok(());
    }

    #[test]
    fn it_ignores_blank_input() -> Result<()> {
        let (tx, mut rx) = mpsc::unbounded_channel::<Action>();
        let mut app_state = AppState::default();

        assert!(!app_state.submit("  \n ", &tx)?);
        assert!(!app_state.session.is_typing());
        assert_eq!(app_state.session.messages().len(), 1);
        assert!(rx.try_recv().is_err());

        return Ok(());
    }

    #[test]
    fn it_scrolls_to_the_newest_message() -> Result<()> {
        let (tx, _rx) = mpsc::unbounded_channel::<Action>();
        let mut app_state = AppState::default();

        for idx in 0..10 {
            app_state.submit(&format!("message {idx}"), &tx)?;
        }

        assert!(app_state.bubble_list.len() > 20);
        assert!(app_state.scroll.is_at_bottom());
        assert!(app_state.scroll.position > 0);

        return Ok(());
    }
}

mod handle_reply_due {
    use super::*;

    #[test]
    fn it_appends_the_reply_and_toasts() -> Result<()> {
        let (tx, mut rx) = mpsc::unbounded_channel::<Action>();
        let mut app_state = AppState::default();
        app_state.submit("hello", &tx)?;
        let ticket = expect_schedule(&mut rx)?;

        let session_id = app_state.session.id().clone();
        app_state.handle_reply_due(session_id.clone(), ticket, &tx)?;

        assert!(!app_state.session.is_typing());
        assert_eq!(app_state.session.messages().len(), 3);
        assert_eq!(app_state.session.messages()[2].author(), Author::Bot);
        assert_eq!(
            app_state.toast.as_ref().map(|toast| return toast.text.to_string()),
            Some("Message delivered across the digital ocean!".to_string())
        );

        match rx.try_recv()? {
            Action::ReplyApplied(applied_session_id, applied_ticket) => {
                assert_eq!(applied_session_id, session_id);
                assert_eq!(applied_ticket, ticket);
            }
            _ => bail!("Wrong enum"),
        }

        return Ok(());
    }

    #[test]
    fn it_ignores_other_sessions() -> Result<()> {
        let (tx, mut rx) = mpsc::unbounded_channel::<Action>();
        let mut app_state = AppState::default();
        app_state.submit("hello", &tx)?;
        let ticket = expect_schedule(&mut rx)?;

        app_state.handle_reply_due(SessionId::create(), ticket, &tx)?;

        assert!(app_state.session.is_typing());
        assert_eq!(app_state.session.messages().len(), 2);
        assert!(rx.try_recv().is_err());

        return Ok(());
    }

    #[test]
    fn it_fails_on_unknown_tickets() {
        let (tx, _rx) = mpsc::unbounded_channel::<Action>();
        let mut app_state = AppState::default();
        let session_id = app_state.session.id().clone();

        let res = app_state.handle_reply_due(session_id, ReplyTicket::new(3), &tx);
        assert!(res.is_err());
        insta::assert_snapshot!(res.unwrap_err().to_string(), @"no pending reply for ticket #3");
    }
}

mod tick {
    use super::*;

    #[test]
    fn it_expires_toasts() {
        let mut app_state = AppState::default();
        let now = Instant::now();
        app_state.toast = Some(Toast::new("Ahoy", now));

        app_state.tick(now + Duration::from_secs(1));
        assert!(app_state.toast.is_some());

        app_state.tick(now + Duration::from_secs(3));
        assert!(app_state.toast.is_none());
    }

    #[test]
    fn it_animates_only_while_typing() -> Result<()> {
        let (tx, _rx) = mpsc::unbounded_channel::<Action>();
        let mut app_state = AppState::default();
        let idle_text = app_state.typing.text();

        app_state.tick(Instant::now());
        assert_eq!(app_state.typing.text(), idle_text);

        app_state.submit("hello", &tx)?;
        app_state.tick(Instant::now());
        assert_ne!(app_state.typing.text(), idle_text);

        return Ok(());
    }
}
