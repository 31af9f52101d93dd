//! Search button: the optional `searchButton` element to the right of the
//! query bar. Activated with `Enter` / `Space` when focused, or a left click.

use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    widgets::{Block, Paragraph, Widget},
};

pub const LABEL: &str = "Search";

/// Total width including borders and padding.
pub const WIDTH: u16 = LABEL.len() as u16 + 6;

pub struct SearchButton<'a> {
    focused: bool,
    theme: &'a Theme,
}

impl<'a> SearchButton<'a> {
    pub fn new(focused: bool, theme: &'a Theme) -> Self {
        Self { focused, theme }
    }
}

impl Widget for SearchButton<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let style = if self.focused {
            self.theme.button_focused
        } else {
            self.theme.button
        };
        let block = Block::bordered().border_style(self.theme.border(self.focused));
        let inner = block.inner(area);
        block.render(area, buf);

        Paragraph::new(format!("[ {LABEL} ]"))
            .style(style)
            .alignment(Alignment::Center)
            .render(inner, buf);
    }
}
