//! Store: the session-wide list of normalised [`Record`] values.
//!
//! The store is the single source of truth for searches. It starts empty and
//! is only ever replaced wholesale by the loader; readers take a cheap
//! [`snapshot`](RecordStore::snapshot) and never see a half-written list.

use crate::types::Record;
use std::{cell::RefCell, rc::Rc};

/// Shared handle to the record list. Clones point at the same list.
#[derive(Debug, Clone)]
pub struct RecordStore {
    records: Rc<RefCell<Rc<[Record]>>>,
}

impl Default for RecordStore {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordStore {
    pub fn new() -> Self {
        Self {
            records: Rc::new(RefCell::new(Rc::from(Vec::new()))),
        }
    }

    /// Swap in a new list in a single assignment.
    pub fn replace(&self, records: Vec<Record>) {
        *self.records.borrow_mut() = Rc::from(records);
    }

    /// The current list. Later replacements do not affect a taken snapshot.
    pub fn snapshot(&self) -> Rc<[Record]> {
        Rc::clone(&self.records.borrow())
    }

    pub fn len(&self) -> usize {
        self.records.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
