//! Scrolling and viewport management utilities
//!
//! Keeps the highlighted row of a list inside its visible window.

/// Scrolling state for a selectable list
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollState {
    /// Current scroll offset (index of first visible item)
    pub offset: usize,
    /// Total number of items
    pub total_items: usize,
    /// Number of items that can be visible at once
    pub visible_items: usize,
    /// Highlighted item, `None` when nothing is highlighted
    pub selected: Option<usize>,
}

impl ScrollState {
    /// Create a new scroll state with the first item highlighted
    pub fn new(total_items: usize, visible_items: usize) -> Self {
        Self {
            offset: 0,
            total_items,
            visible_items: visible_items.max(1),
            selected: if total_items > 0 { Some(0) } else { None },
        }
    }

    /// Update visible items count (for window resize)
    pub fn update_visible_items(&mut self, new_visible_items: usize) {
        self.visible_items = new_visible_items.max(1);
        self.ensure_selected_visible();
    }

    /// Move selection up by one item.
    ///
    /// A list with nothing highlighted re-enters at the last item.
    pub fn move_up(&mut self) {
        self.selected = match self.selected {
            Some(index) => Some(index.saturating_sub(1)),
            None => self.total_items.checked_sub(1),
        };
        self.ensure_selected_visible();
    }

    /// Move selection down by one item.
    ///
    /// A list with nothing highlighted re-enters at the first item.
    pub fn move_down(&mut self) {
        self.selected = match self.selected {
            Some(index) if index + 1 < self.total_items => Some(index + 1),
            Some(index) => Some(index),
            None if self.total_items > 0 => Some(0),
            None => None,
        };
        self.ensure_selected_visible();
    }

    /// Highlight `index` (clamped to the last item), or clear with `None`
    pub fn set_selected(&mut self, index: Option<usize>) {
        self.selected = match index {
            Some(index) => self
                .total_items
                .checked_sub(1)
                .map(|last| index.min(last)),
            None => None,
        };
        self.ensure_selected_visible();
    }

    /// Ensure the selected item is visible by adjusting scroll offset
    fn ensure_selected_visible(&mut self) {
        if let Some(selected) = self.selected {
            if selected < self.offset {
                self.offset = selected;
            } else if selected >= self.offset + self.visible_items {
                self.offset = selected + 1 - self.visible_items;
            }
        }

        let max_offset = self.total_items.saturating_sub(self.visible_items);
        if self.offset > max_offset {
            self.offset = max_offset;
        }
    }

    /// Get the range of visible items (start, end)
    pub fn visible_range(&self) -> (usize, usize) {
        let start = self.offset;
        let end = (start + self.visible_items).min(self.total_items);
        (start, end)
    }

    /// Get current page info for display
    pub fn page_info(&self) -> Option<(usize, usize)> {
        if self.total_items <= self.visible_items {
            None
        } else {
            let current_page = self.offset / self.visible_items + 1;
            let total_pages = self.total_items.div_ceil(self.visible_items);
            Some((current_page, total_pages))
        }
    }
}
