#[cfg(test)]
#[path = "events_test.rs"]
mod tests;

use anyhow::Result;
use crossterm::event::Event as CrosstermEvent;
use crossterm::event::EventStream;
use crossterm::event::MouseEventKind;
use futures::StreamExt;
use tokio::sync::mpsc;
use tokio::time;
use tui_textarea::Input;
use tui_textarea::Key;

use crate::domain::models::Event;

const TICK_RATE: time::Duration = time::Duration::from_millis(400);

/// Merges terminal input with events coming back from the background worker.
pub struct EventsService {
    crossterm_events: EventStream,
    events: mpsc::UnboundedReceiver<Event>,
}

impl EventsService {
    pub fn new(events: mpsc::UnboundedReceiver<Event>) -> EventsService {
        return EventsService {
            crossterm_events: EventStream::new(),
            events,
        };
    }

    fn handle_crossterm(&self, event: CrosstermEvent) -> Option<Event> {
        match event {
            CrosstermEvent::Paste(text) => return Some(Event::KeyboardPaste(text)),
            CrosstermEvent::Resize(_, _) => return Some(Event::UIResize()),
            CrosstermEvent::Mouse(mouseevent) => match mouseevent.kind {
                MouseEventKind::ScrollUp => return Some(Event::UIScrollUp()),
                MouseEventKind::ScrollDown => return Some(Event::UIScrollDown()),
                _ => return None,
            },
            CrosstermEvent::Key(keyevent) => return Some(key_to_event(keyevent.into())),
            _ => return None,
        }
    }

    pub async fn next(&mut self) -> Result<Event> {
        loop {
            let evt = tokio::select! {
                event = self.events.recv() => event,
                event = self.crossterm_events.next() => match event {
                    Some(Ok(input)) => self.handle_crossterm(input),
                    Some(Err(_)) => None,
                    None => None
                },
                _ = time::sleep(TICK_RATE) => Some(Event::UITick())
            };

            if let Some(event) = evt {
                return Ok(event);
            }
        }
    }
}

/// Keys the chat reacts to. Anything else goes to the input box.
fn key_to_event(input: Input) -> Event {
    let event = match (&input.key, input.ctrl, input.alt) {
        (Key::Char('c'), true, _) => Some(Event::KeyboardCTRLC()),
        (Key::Char('d'), true, _) | (Key::PageDown, _, _) => Some(Event::UIScrollPageDown()),
        (Key::Char('u'), true, _) | (Key::PageUp, _, _) => Some(Event::UIScrollPageUp()),
        (Key::Down, _, _) => Some(Event::UIScrollDown()),
        (Key::Up, _, _) => Some(Event::UIScrollUp()),
        (Key::Enter, _, true) => Some(Event::KeyboardNewLine()),
        (Key::Enter, _, false) => Some(Event::KeyboardEnter()),
        _ => None,
    };

    match event {
        Some(event) => return event,
        None => return Event::KeyboardCharInput(input),
    }
}
