#[cfg(test)]
#[path = "bubble_list_test.rs"]
mod tests;

use std::collections::BTreeMap;

use ratatui::prelude::Backend;
use ratatui::prelude::Rect;
use ratatui::text::Line;
use ratatui::widgets::Block;
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use super::Bubble;
use super::BubbleAlignment;
use crate::domain::models::Author;
use crate::domain::models::Message;
use crate::domain::models::MessageId;

/// Rendered bubbles for the whole chat log. Messages never change once
/// appended, so a bubble only needs rebuilding when the width changes.
#[derive(Default)]
pub struct BubbleList {
    cache: BTreeMap<MessageId, Vec<Line<'static>>>,
    line_width: usize,
    lines_len: usize,
}

impl BubbleList {
    pub fn set_messages(&mut self, messages: &[Message], line_width: usize) {
        if self.line_width != line_width {
            self.cache.clear();
            self.line_width = line_width;
        }

        for message in messages {
            if self.cache.contains_key(&message.id()) {
                continue;
            }

            let mut align = BubbleAlignment::Left;
            if message.author() == Author::User {
                align = BubbleAlignment::Right;
            }

            let lines = Bubble::new(message, align, line_width).as_lines();
            self.cache.insert(message.id(), lines);
        }

        self.lines_len = self.cache.values().map(|lines| return lines.len()).sum();
    }

    pub fn len(&self) -> usize {
        return self.lines_len;
    }

    pub fn render<B: Backend>(&self, frame: &mut Frame<B>, rect: Rect, scroll: u16) {
        let lines = self
            .cache
            .values()
            .flat_map(|lines| return lines.to_owned())
            .collect::<Vec<Line<'static>>>();

        frame.render_widget(
            Paragraph::new(lines)
                .block(Block::default())
                .scroll((scroll, 0)),
            rect,
        );
    }
}
