use ratatui::prelude::Alignment;
use ratatui::prelude::Backend;
use ratatui::prelude::Rect;
use ratatui::style::Color;
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::widgets::BorderType;
use ratatui::widgets::Borders;
use ratatui::widgets::Padding;
use ratatui::widgets::Paragraph;
use ratatui::Frame;

const FRAMES: [&str; 4] = ["●  ", "●● ", "●●●", " ●●"];

/// Shown in place of the input box while the bot is typing.
#[derive(Default)]
pub struct TypingIndicator {
    frame: usize,
}

impl TypingIndicator {
    pub fn advance(&mut self) {
        self.frame = (self.frame + 1) % FRAMES.len();
    }

    pub fn text(&self) -> String {
        return format!("{} Sailing through thoughts...", FRAMES[self.frame]);
    }

    pub fn render<B: Backend>(&self, frame: &mut Frame<B>, rect: Rect) {
        frame.render_widget(
            Paragraph::new(self.text())
                .style(Style::default().fg(Color::Cyan))
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_type(BorderType::Rounded)
                        .padding(Padding::new(1, 1, 0, 0)),
                )
                .alignment(Alignment::Left),
            rect,
        );
    }
}
