//! Status line: one row at the bottom of the screen.
//!
//! Left side reports the startup load; right side carries keybinding hints.

use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::Widget,
};
use seek_core::bind::LoadStatus;

pub struct StatusLine<'a> {
    status: LoadStatus,
    location: &'a str,
    shown: usize,
    theme: &'a Theme,
}

impl<'a> StatusLine<'a> {
    /// `shown` is the number of result blocks currently on screen.
    pub fn new(status: LoadStatus, location: &'a str, shown: usize, theme: &'a Theme) -> Self {
        Self { status, location, shown, theme }
    }

    fn summary(&self) -> String {
        match self.status {
            LoadStatus::Pending => format!(" loading {} …", self.location),
            LoadStatus::Loaded(count) => {
                format!(" {count} records from {} · {} shown", self.location, self.shown)
            }
            LoadStatus::Failed => format!(" failed to load {}", self.location),
        }
    }
}

impl Widget for StatusLine<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let style = match self.status {
            LoadStatus::Failed => self.theme.status_error,
            _ => self.theme.status,
        };
        buf.set_style(area, self.theme.status);
        buf.set_stringn(area.x, area.y, self.summary(), area.width as usize, style);

        let hint = " Tab:focus  ?:help  Ctrl+c:quit ";
        let hint_x = area.right().saturating_sub(hint.len() as u16);
        buf.set_string(
            hint_x,
            area.y,
            hint,
            self.theme.status.patch(Style::default().add_modifier(Modifier::DIM)),
        );
    }
}
