use std::io;
use std::time::Instant;

use anyhow::Result;
use crossterm::cursor;
use crossterm::event::DisableBracketedPaste;
use crossterm::event::DisableMouseCapture;
use crossterm::event::EnableBracketedPaste;
use crossterm::event::EnableMouseCapture;
use crossterm::terminal::disable_raw_mode;
use crossterm::terminal::enable_raw_mode;
use crossterm::terminal::EnterAlternateScreen;
use crossterm::terminal::LeaveAlternateScreen;
use ratatui::backend::CrosstermBackend;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use ratatui::Terminal;
use tokio::sync::mpsc;

use crate::domain::models::Action;
use crate::domain::models::Event;
use crate::domain::models::TextArea;
use crate::domain::services::events::EventsService;
use crate::domain::services::AppState;

fn render_header<B: Backend>(frame: &mut Frame<B>, rect: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            "Ocean Chat",
            Style::default()
                .fg(Color::Rgb(64, 164, 223))
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Navigate the depths of conversation",
            Style::default().fg(Color::Gray),
        )),
    ];

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), rect);
}

async fn start_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app_state: &mut AppState,
    tx: mpsc::UnboundedSender<Action>,
    rx: mpsc::UnboundedReceiver<Event>,
) -> Result<()> {
    let mut events = EventsService::new(rx);
    let mut textarea = TextArea::default();

    loop {
        terminal.draw(|frame| {
            let layout = Layout::default()
                .direction(Direction::Vertical)
                .constraints(vec![
                    Constraint::Length(2),
                    Constraint::Min(1),
                    Constraint::Length(1),
                    Constraint::Max(4),
                ])
                .split(frame.size());

            if layout[1].width != app_state.last_known_width
                || layout[1].height != app_state.last_known_height
            {
                app_state.set_rect(layout[1]);
            }

            render_header(frame, layout[0]);
            app_state
                .bubble_list
                .render(frame, layout[1], app_state.scroll.position);

            if let Some(toast) = &app_state.toast {
                toast.render(frame, layout[2]);
            }

            // Input stays disabled until the bot has answered.
            if app_state.session.is_typing() {
                app_state.typing.render(frame, layout[3]);
            } else {
                frame.render_widget(textarea.widget(), layout[3]);
            }
        })?;

        match events.next().await? {
            Event::KeyboardCTRLC() => {
                break;
            }
            Event::ReplyDue(session_id, ticket) => {
                app_state.handle_reply_due(session_id, ticket, &tx)?;
            }
            Event::UITick() => {
                app_state.tick(Instant::now());
            }
            Event::UIResize() => {
                terminal.autoresize()?;
            }
            Event::UIScrollDown() => {
                app_state.scroll.down();
            }
            Event::UIScrollUp() => {
                app_state.scroll.up();
            }
            Event::UIScrollPageDown() => {
                app_state.scroll.down_page();
            }
            Event::UIScrollPageUp() => {
                app_state.scroll.up_page();
            }
            _ if app_state.session.is_typing() => (),
            Event::KeyboardEnter() => {
                let input_str = textarea.lines().join("\n");
                if app_state.submit(&input_str, &tx)? {
                    textarea = TextArea::default();
                }
            }
            Event::KeyboardNewLine() => {
                textarea.insert_newline();
            }
            Event::KeyboardPaste(text) => {
                for char in text.chars() {
                    if char == '\n' {
                        textarea.insert_newline();
                    } else if char != '\r' {
                        textarea.insert_char(char);
                    }
                }
            }
            Event::KeyboardCharInput(input) => {
                textarea.input(input);
            }
        }
    }

    return Ok(());
}

pub fn destruct_terminal_for_panic() {
    let _ = disable_raw_mode();
    let _ = crossterm::execute!(
        io::stdout(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        DisableBracketedPaste
    );
    let _ = crossterm::execute!(io::stdout(), cursor::Show);
}

pub async fn start(
    tx: mpsc::UnboundedSender<Action>,
    rx: mpsc::UnboundedReceiver<Event>,
) -> Result<()> {
    let mut app_state = AppState::new()?;

    let stdout = io::stdout();
    let mut stdout = stdout.lock();

    enable_raw_mode()?;
    crossterm::execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        EnableBracketedPaste
    )?;
    let term_backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(term_backend)?;

    let res = start_loop(&mut terminal, &mut app_state, tx, rx).await;

    disable_raw_mode()?;
    crossterm::execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        DisableBracketedPaste
    )?;
    terminal.show_cursor()?;

    tracing::debug!(
        session_id = app_state.session.id().as_str(),
        messages = app_state.session.messages().len(),
        pending_replies = app_state.session.pending_replies(),
        "session closed"
    );

    return res;
}
