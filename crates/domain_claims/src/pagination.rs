//! Browsing cursor for the claim list
//!
//! Conversational turns are stateless between invocations: the cursor is
//! rebuilt every turn from persisted slot values plus the store's length
//! at request time, and never assumes in-process memory survives a turn.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Claims shown per page when browsing
pub const DEFAULT_PAGE_SIZE: usize = 3;

/// Which way to move the cursor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageDirection {
    /// Reset to the first page
    Init,
    /// One page forward, clamped to the last page
    Next,
    /// One page back, clamped to the first page
    Prev,
}

impl FromStr for PageDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "init" => Ok(PageDirection::Init),
            "next" => Ok(PageDirection::Next),
            "prev" | "previous" => Ok(PageDirection::Prev),
            other => Err(format!("unknown page direction '{other}'")),
        }
    }
}

/// Position within the claim list while a member browses
///
/// `index` always points at the first claim of the current page and never
/// exceeds the start of the last page for the store length the cursor was
/// advanced against. No wraparound in either direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cursor {
    /// Offset of the first claim on the current page
    pub index: usize,
    /// Page size, constant across a conversation
    pub page_size: usize,
}

impl Cursor {
    /// Cursor at the start of the list
    pub fn start() -> Self {
        Self {
            index: 0,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    /// Rebuilds a cursor from persisted slot values
    pub fn restore(index: usize, page_size: usize) -> Self {
        Self {
            index,
            page_size: page_size.max(1),
        }
    }

    /// Moves the cursor against the current store length
    ///
    /// `total` is the claim count at request time; a cursor persisted when
    /// the list was longer is clamped back into range here.
    pub fn advance(self, direction: PageDirection, total: usize) -> Self {
        let last = Self::last_page_start(total, self.page_size);
        let index = match direction {
            PageDirection::Init => 0,
            PageDirection::Next => (self.index + self.page_size).min(last),
            PageDirection::Prev => self.index.saturating_sub(self.page_size),
        };
        Self {
            index: index.min(last),
            page_size: self.page_size,
        }
    }

    /// True when no page follows the current one
    pub fn is_last_page(&self, total: usize) -> bool {
        self.index >= Self::last_page_start(total, self.page_size)
    }

    /// True when the cursor is on the first page
    pub fn is_first_page(&self) -> bool {
        self.index == 0
    }

    /// The slice of claims on the current page
    pub fn page_of<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let start = self.index.min(items.len());
        let end = (start + self.page_size).min(items.len());
        &items[start..end]
    }

    fn last_page_start(total: usize, page_size: usize) -> usize {
        if total == 0 {
            0
        } else {
            ((total - 1) / page_size) * page_size
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_resets() {
        let cursor = Cursor::restore(6, 3).advance(PageDirection::Init, 7);
        assert_eq!(cursor.index, 0);
        assert!(cursor.is_first_page());
    }

    #[test]
    fn test_next_clamps_at_last_page() {
        let mut cursor = Cursor::start();
        // 7 claims, page size 3: pages start at 0, 3, 6
        for _ in 0..10 {
            cursor = cursor.advance(PageDirection::Next, 7);
        }
        assert_eq!(cursor.index, 6);
        assert!(cursor.is_last_page(7));
    }

    #[test]
    fn test_prev_clamps_at_zero() {
        let mut cursor = Cursor::restore(3, 3);
        for _ in 0..10 {
            cursor = cursor.advance(PageDirection::Prev, 7);
        }
        assert_eq!(cursor.index, 0);
    }

    #[test]
    fn test_empty_store() {
        let cursor = Cursor::start().advance(PageDirection::Next, 0);
        assert_eq!(cursor.index, 0);
        assert!(cursor.is_last_page(0));
        assert!(cursor.page_of::<u32>(&[]).is_empty());
    }

    #[test]
    fn test_stale_cursor_clamped_to_shorter_list() {
        // persisted when the list had 10 entries, list now has 4
        let cursor = Cursor::restore(9, 3).advance(PageDirection::Next, 4);
        assert_eq!(cursor.index, 3);
    }

    #[test]
    fn test_page_of_slices() {
        let items: Vec<u32> = (0..7).collect();
        let cursor = Cursor::restore(6, 3);
        assert_eq!(cursor.page_of(&items), &[6]);
    }

    #[test]
    fn test_direction_parse() {
        assert_eq!("next".parse::<PageDirection>().unwrap(), PageDirection::Next);
        assert_eq!("Prev".parse::<PageDirection>().unwrap(), PageDirection::Prev);
        assert!("sideways".parse::<PageDirection>().is_err());
    }
}
