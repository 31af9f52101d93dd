//! Results pane: the `results` element. Holds whatever the renderer last
//! wrote and draws it as a scrollable list of result blocks.
//!
//! Each block takes four rows: heading, description, link, spacer.
//!
//! # Navigation (when pane is focused)
//!
//! | Key | Action |
//! |-----|--------|
//! | `↑` / `k` | Select previous block |
//! | `↓` / `j` | Select next block |
//! | `Enter` / `o` | Open the selected block's link |

use std::cell::Cell;

use crate::event::{AppEvent, Direction};
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{
        Block, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState, StatefulWidget, Widget,
    },
};
use seek_core::render::{Link, ResultBlock, ResultsView, PLACEHOLDER};

const BLOCK_ROWS: usize = 4;

// ---------------------------------------------------------------------------
// State
// ---------------------------------------------------------------------------

/// What the results area currently shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultsContent {
    Message(String),
    Blocks(Vec<ResultBlock>),
}

#[derive(Debug)]
pub struct ResultsState {
    pub content: ResultsContent,
    /// Index of the highlighted block.
    pub selected: usize,
    /// Index of the first visible block, updated during render.
    offset: Cell<usize>,
}

impl Default for ResultsState {
    fn default() -> Self {
        Self {
            content: ResultsContent::Message(PLACEHOLDER.to_string()),
            selected: 0,
            offset: Cell::new(0),
        }
    }
}

impl ResultsView for ResultsState {
    fn clear(&mut self) {
        self.content = ResultsContent::Blocks(Vec::new());
        self.selected = 0;
        self.offset.set(0);
    }

    fn append_block(&mut self, block: ResultBlock) {
        match &mut self.content {
            ResultsContent::Blocks(blocks) => blocks.push(block),
            ResultsContent::Message(_) => self.content = ResultsContent::Blocks(vec![block]),
        }
    }

    fn show_message(&mut self, text: &str) {
        self.content = ResultsContent::Message(text.to_string());
        self.selected = 0;
        self.offset.set(0);
    }
}

impl ResultsState {
    pub fn blocks(&self) -> &[ResultBlock] {
        match &self.content {
            ResultsContent::Blocks(blocks) => blocks,
            ResultsContent::Message(_) => &[],
        }
    }

    pub fn message(&self) -> Option<&str> {
        match &self.content {
            ResultsContent::Message(text) => Some(text),
            ResultsContent::Blocks(_) => None,
        }
    }

    /// Link of the highlighted block, if it points somewhere.
    pub fn selected_link(&self) -> Option<&Link> {
        self.blocks()
            .get(self.selected)
            .map(|block| &block.link)
            .filter(|link| link.is_navigable())
    }

    pub fn handle(&mut self, event: &AppEvent) {
        let total = self.blocks().len();
        if total == 0 {
            return;
        }
        match event {
            AppEvent::Nav(Direction::Up) => {
                self.selected = self.selected.saturating_sub(1);
            }
            AppEvent::Nav(Direction::Down) => {
                if self.selected + 1 < total {
                    self.selected += 1;
                }
            }
            AppEvent::Home => self.selected = 0,
            AppEvent::End => self.selected = total - 1,
            _ => return,
        }
        tracing::debug!(selected = self.selected, "results: selection moved");
    }

    /// Adjust the scroll offset so the selection stays visible.
    fn visible_offset(&self, capacity: usize) -> usize {
        let capacity = capacity.max(1);
        let mut offset = self.offset.get();
        if self.selected < offset {
            offset = self.selected;
        } else if self.selected >= offset + capacity {
            offset = self.selected + 1 - capacity;
        }
        self.offset.set(offset);
        offset
    }
}

// ---------------------------------------------------------------------------
// Widget
// ---------------------------------------------------------------------------

pub struct ResultsPane<'a> {
    state: &'a ResultsState,
    focused: bool,
    theme: &'a Theme,
}

impl<'a> ResultsPane<'a> {
    pub fn new(state: &'a ResultsState, focused: bool, theme: &'a Theme) -> Self {
        Self { state, focused, theme }
    }
}

impl Widget for ResultsPane<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = match &self.state.content {
            ResultsContent::Blocks(blocks) => format!(" Results ({}) ", blocks.len()),
            ResultsContent::Message(_) => " Results ".to_string(),
        };
        let block = Block::bordered()
            .title(title)
            .border_style(self.theme.border(self.focused));
        let inner = block.inner(area);
        block.render(area, buf);

        let blocks = match &self.state.content {
            ResultsContent::Message(text) => {
                Paragraph::new(Line::from(Span::styled(text.as_str(), self.theme.message)))
                    .render(inner, buf);
                return;
            }
            ResultsContent::Blocks(blocks) => blocks,
        };

        let capacity = (inner.height as usize / BLOCK_ROWS).max(1);
        let offset = self.state.visible_offset(capacity);
        let end = (offset + capacity).min(blocks.len());

        let mut lines: Vec<Line> = Vec::with_capacity((end - offset) * BLOCK_ROWS);
        for (index, result) in blocks[offset..end].iter().enumerate() {
            let selected = self.focused && offset + index == self.state.selected;
            let marker = if selected { "▌ " } else { "  " };
            let link_style = if result.link.is_navigable() {
                self.theme.link
            } else {
                self.theme.no_url
            };

            let mut rows = [
                Line::from(vec![
                    Span::raw(marker),
                    Span::styled(result.heading.as_str(), self.theme.heading),
                ]),
                Line::from(vec![
                    Span::raw(marker),
                    Span::styled(result.body.as_str(), self.theme.body),
                ]),
                Line::from(vec![
                    Span::raw(marker),
                    Span::styled(result.link.text.as_str(), link_style),
                ]),
            ];
            if selected {
                for row in &mut rows {
                    *row = row.clone().patch_style(self.theme.selected);
                }
            }
            lines.extend(rows);
            lines.push(Line::default());
        }

        let text_area = Rect { width: inner.width.saturating_sub(1), ..inner };
        let sb_area = Rect {
            x: inner.right().saturating_sub(1),
            width: 1,
            ..inner
        };
        Paragraph::new(lines).render(text_area, buf);

        if blocks.len() > capacity {
            let mut sb_state = ScrollbarState::new(blocks.len())
                .position(offset)
                .viewport_content_length(capacity);
            StatefulWidget::render(
                Scrollbar::new(ScrollbarOrientation::VerticalRight)
                    .begin_symbol(None)
                    .end_symbol(None),
                sb_area,
                buf,
                &mut sb_state,
            );
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
