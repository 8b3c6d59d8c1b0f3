use std::time::Duration;
use std::time::Instant;

use ratatui::prelude::Alignment;
use ratatui::prelude::Backend;
use ratatui::prelude::Rect;
use ratatui::style::Color;
use ratatui::style::Modifier;
use ratatui::style::Style;
use ratatui::widgets::Paragraph;
use ratatui::Frame;

pub const TOAST_LIFETIME: Duration = Duration::from_secs(3);

/// Transient status line, dropped once `expires_at` passes.
pub struct Toast {
    pub text: String,
    pub expires_at: Instant,
}

impl Toast {
    pub fn new(text: &str, now: Instant) -> Toast {
        return Toast {
            text: text.to_string(),
            expires_at: now + TOAST_LIFETIME,
        };
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        return now >= self.expires_at;
    }

    pub fn render<B: Backend>(&self, frame: &mut Frame<B>, rect: Rect) {
        frame.render_widget(
            Paragraph::new(format!("~ {} ~", self.text))
                .style(
                    Style::default()
                        .fg(Color::LightCyan)
                        .add_modifier(Modifier::ITALIC),
                )
                .alignment(Alignment::Center),
            rect,
        );
    }
}
