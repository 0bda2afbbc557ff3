//! The static content list.
//!
//! Items are generated once and never change. Only rows that intersect the
//! viewport are handed to the renderer.

use crate::domain::ScrollState;

/// Rows a single item card occupies.
pub const ITEM_HEIGHT: u16 = 3;

/// Blank rows between cards.
pub const ITEM_SPACING: u16 = 1;

const ITEM_STRIDE: u16 = ITEM_HEIGHT + ITEM_SPACING;

/// One placeholder row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListItem {
    index: usize,
    label: String,
}

impl ListItem {
    fn new(index: usize) -> Self {
        Self {
            index,
            label: format!("Item {}", index),
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

/// An item positioned relative to the top of the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibleItem<'a> {
    pub item: &'a ListItem,
    /// Row of the card's top edge; negative when clipped at the top
    pub top: i32,
}

/// Fixed list of items plus its scroll position.
#[derive(Debug, Clone)]
pub struct ContentList {
    items: Vec<ListItem>,
    scroll: ScrollState,
}

impl ContentList {
    pub fn new(count: usize) -> Self {
        Self {
            items: (0..count).map(ListItem::new).collect(),
            scroll: ScrollState::new(),
        }
    }

    pub fn items(&self) -> &[ListItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn scroll(&self) -> &ScrollState {
        &self.scroll
    }

    pub fn scroll_mut(&mut self) -> &mut ScrollState {
        &mut self.scroll
    }

    /// Total rows needed to show every card.
    pub fn content_height(&self) -> u16 {
        let n = self.items.len() as u32;
        if n == 0 {
            return 0;
        }
        let rows = n * ITEM_STRIDE as u32 - ITEM_SPACING as u32;
        rows.min(u16::MAX as u32) as u16
    }

    /// Refresh scroll limits for a viewport height.
    pub fn set_viewport_height(&mut self, height: u16) {
        let content = self.content_height();
        self.scroll.update_limits(content, height);
    }

    /// Items intersecting a viewport of `height` rows at the current offset.
    pub fn visible_items(&self, height: u16) -> Vec<VisibleItem<'_>> {
        if height == 0 {
            return Vec::new();
        }
        let offset = self.scroll.offset() as usize;
        let stride = ITEM_STRIDE as usize;
        let first = offset / stride;
        let last = (offset + height as usize - 1) / stride;

        self.items
            .iter()
            .enumerate()
            .skip(first)
            .take(last + 1 - first)
            .map(|(i, item)| VisibleItem {
                item,
                top: (i * stride) as i32 - offset as i32,
            })
            .filter(|v| v.top + (ITEM_HEIGHT as i32) > 0)
            .collect()
    }
}
