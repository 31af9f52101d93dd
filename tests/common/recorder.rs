//! A [`ResultsView`] that records every write for later inspection.

use seek::render::{ResultBlock, ResultsView};

#[derive(Debug, Default)]
pub struct RecordingView {
    pub message: Option<String>,
    pub blocks: Vec<ResultBlock>,
    /// Number of full re-renders (`clear` or `show_message` calls).
    pub renders: usize,
}

impl RecordingView {
    pub fn headings(&self) -> Vec<&str> {
        self.blocks.iter().map(|b| b.heading.as_str()).collect()
    }
}

impl ResultsView for RecordingView {
    fn clear(&mut self) {
        self.renders += 1;
        self.message = None;
        self.blocks.clear();
    }

    fn append_block(&mut self, block: ResultBlock) {
        self.blocks.push(block);
    }

    fn show_message(&mut self, text: &str) {
        self.renders += 1;
        self.blocks.clear();
        self.message = Some(text.to_string());
    }
}
