#[cfg(test)]
#[path = "scroll_test.rs"]
mod tests;

const PAGE_SIZE: u16 = 10;

/// Vertical offset into the bubble list, clamped so the last line never
/// scrolls above the bottom of the viewport.
#[derive(Default)]
pub struct Scroll {
    content_length: u16,
    viewport_length: u16,
    pub position: u16,
}

impl Scroll {
    fn max_position(&self) -> u16 {
        return self.content_length.saturating_sub(self.viewport_length);
    }

    pub fn up(&mut self) {
        self.position = self.position.saturating_sub(1);
    }

    pub fn up_page(&mut self) {
        self.position = self.position.saturating_sub(PAGE_SIZE);
    }

    pub fn down(&mut self) {
        self.position = self.position.saturating_add(1).min(self.max_position());
    }

    pub fn down_page(&mut self) {
        self.position = self
            .position
            .saturating_add(PAGE_SIZE)
            .min(self.max_position());
    }

    pub fn last(&mut self) {
        self.position = self.max_position();
    }

    pub fn is_at_bottom(&self) -> bool {
        return self.position >= self.max_position();
    }

    pub fn set_state(&mut self, content_length: u16, viewport_length: u16) {
        self.content_length = content_length;
        self.viewport_length = viewport_length;
        self.position = self.position.min(self.max_position());
    }
}
