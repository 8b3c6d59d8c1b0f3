#[cfg(test)]
#[path = "bubble_test.rs"]
mod tests;

use ratatui::style::Color;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::text::Span;

use crate::domain::models::Author;
use crate::domain::models::Message;

#[derive(PartialEq, Eq)]
pub enum BubbleAlignment {
    Left,
    Right,
}

pub struct Bubble<'a> {
    alignment: BubbleAlignment,
    message: &'a Message,
    window_max_width: usize,
}

pub struct BubbleConfig {
    pub bubble_padding: usize,
    pub border_elements_length: usize,
    pub outer_padding_percentage: f32,
}

fn repeat_from_subtractions(text: &str, subtractions: Vec<usize>) -> String {
    let mut iter = subtractions.into_iter();
    let first = iter.next().unwrap_or(0);
    let count = iter.fold(first, |acc, val| return acc.saturating_sub(val));

    return text.repeat(count);
}

fn char_len(text: &str) -> usize {
    return text.chars().count();
}

impl<'a> Bubble<'a> {
    pub fn new(
        message: &'a Message,
        alignment: BubbleAlignment,
        window_max_width: usize,
    ) -> Bubble<'a> {
        return Bubble {
            alignment,
            message,
            window_max_width,
        };
    }

    pub fn style_config() -> BubbleConfig {
        return BubbleConfig {
            // Unicode character border + padding.
            bubble_padding: 8,
            // left border + left padding + (text, not counted) + right padding + right border +
            // scrollbar.
            border_elements_length: 5,
            outer_padding_percentage: 0.04,
        };
    }

    /// Author and clock time, drawn into the top border.
    pub fn title(&self) -> String {
        return format!(
            "{} {}",
            self.message.author().to_string(),
            self.message.time_label()
        );
    }

    pub fn as_lines(&self) -> Vec<Line<'static>> {
        let max_line_length = self.get_max_line_length();

        let lines = self
            .message
            .text()
            .lines()
            .flat_map(|line| return wrap_line(line, max_line_length))
            .map(|line| return self.pad_line(line, max_line_length))
            .collect::<Vec<Line<'static>>>();

        return self.wrap_lines_in_bubble(lines, max_line_length);
    }

    fn pad_line(&self, text: String, max_line_length: usize) -> Line<'static> {
        let fill = repeat_from_subtractions(" ", vec![max_line_length, char_len(&text)]);
        let formatted_line_length =
            char_len(&text) + fill.len() + Bubble::style_config().bubble_padding;

        let outer_bubble_padding =
            repeat_from_subtractions(" ", vec![self.window_max_width, formatted_line_length]);

        let mut spans = vec![];
        if self.alignment == BubbleAlignment::Right {
            spans.push(Span::from(outer_bubble_padding.to_string()));
        }

        spans.push(self.border_span("│ ".to_string()));
        spans.push(Span::from(text));
        spans.push(self.border_span(format!("{fill} │")));

        if self.alignment == BubbleAlignment::Left {
            spans.push(Span::from(outer_bubble_padding));
        }

        return Line::from(spans);
    }

    fn get_max_line_length(&self) -> usize {
        let style_config = Bubble::style_config();
        // Add a minimum 4% of padding on the side.
        let min_bubble_padding_length = ((self.window_max_width as f32
            * style_config.outer_padding_percentage)
            .ceil()) as usize;

        // Border elements + minimum bubble padding.
        let line_border_width = style_config.border_elements_length + min_bubble_padding_length;

        let max_line_length = self
            .message
            .text()
            .lines()
            .map(char_len)
            .max()
            .unwrap_or(0)
            .min(self.window_max_width.saturating_sub(line_border_width));

        return max_line_length.max(char_len(&self.title()));
    }

    fn wrap_lines_in_bubble(
        &self,
        lines: Vec<Line<'static>>,
        max_line_length: usize,
    ) -> Vec<Line<'static>> {
        let title = self.title();
        // Add 2 for the vertical bars.
        let title_fill = "─".repeat(max_line_length + 2 - char_len(&title));
        let top_bar = format!("╭{title}{title_fill}╮");
        let bottom_bar = format!("╰{}╯", "─".repeat(max_line_length + 2));
        let bar_bubble_padding = repeat_from_subtractions(
            " ",
            vec![
                self.window_max_width,
                max_line_length,
                Bubble::style_config().bubble_padding,
            ],
        );

        let mut res = vec![self.bar_line(top_bar, &bar_bubble_padding)];
        res.extend(lines);
        res.push(self.bar_line(bottom_bar, &bar_bubble_padding));

        return res;
    }

    fn bar_line(&self, bar: String, padding: &str) -> Line<'static> {
        if self.alignment == BubbleAlignment::Left {
            return Line::from(vec![self.border_span(bar), Span::from(padding.to_string())]);
        }

        return Line::from(vec![Span::from(padding.to_string()), self.border_span(bar)]);
    }

    fn border_span(&self, text: String) -> Span<'static> {
        if self.message.author() == Author::Bot {
            return Span::styled(text, Style::default().fg(Color::Rgb(64, 164, 223))); // Sea blue
        }

        return Span::styled(text, Style::default().fg(Color::Rgb(240, 222, 180))); // Sand
    }
}

fn wrap_line(line: &str, max_line_length: usize) -> Vec<String> {
    let max_line_length = max_line_length.max(1);
    let mut lines = vec![];
    let mut current_words: Vec<&str> = vec![];
    let mut char_count = 0;

    for mut word in line.split(' ') {
        // Words wider than the bubble are cut on char boundaries.
        while char_len(word) > max_line_length {
            if !current_words.is_empty() {
                lines.push(current_words.join(" "));
                current_words = vec![];
                char_count = 0;
            }

            let split_at = word
                .char_indices()
                .nth(max_line_length)
                .map(|(idx, _)| return idx)
                .unwrap_or(word.len());
            lines.push(word[..split_at].to_string());
            word = &word[split_at..];
        }

        let word_len = char_len(word);
        if !current_words.is_empty() && char_count + word_len > max_line_length {
            lines.push(current_words.join(" "));
            current_words = vec![];
            char_count = 0;
        }

        current_words.push(word);
        char_count += word_len + 1;
    }
    lines.push(current_words.join(" "));

    return lines;
}
