//! Shift-click selection over an ordered list of items
//!
//! One engine is built per list (e.g. the cards of one expansion). It owns all
//! hover, anchor and range bookkeeping so callers only forward raw
//! focus/pointer/activation events and act on the items an activation returns.

use std::collections::BTreeSet;

/// Number of columns in the card grid, used for up/down traversal
pub const GRID_COLUMNS: usize = 5;

/// An input event as seen by the engine
///
/// `handled` is set when an earlier listener already consumed the event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InteractionEvent {
    pub handled: bool,
    pub shift: bool,
}

impl InteractionEvent {
    pub fn plain() -> Self {
        Self::default()
    }

    pub fn with_shift() -> Self {
        Self {
            handled: false,
            shift: true,
        }
    }

    pub fn consumed() -> Self {
        Self {
            handled: true,
            shift: false,
        }
    }
}

/// Transient interaction state of one list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    /// Last index committed by an activation; anchor of the next shift range
    pub last_clicked: Option<usize>,
    /// Index under the pointer or focus
    pub hovered: Option<usize>,
    /// Index the pending shift range extends to
    pub range_end: Option<usize>,
    /// Inclusive interval between anchor and range end, empty unless both are set and distinct
    pub highlighted: BTreeSet<usize>,
}

impl SelectionState {
    /// The range anchor is always the last committed index
    pub fn anchor(&self) -> Option<usize> {
        self.last_clicked
    }

    fn recompute_highlight(&mut self) {
        self.highlighted.clear();
        if let (Some(anchor), Some(end)) = (self.last_clicked, self.range_end) {
            if anchor != end {
                self.highlighted.extend(anchor.min(end)..=anchor.max(end));
            }
        }
    }
}

/// Arrow keys used for grid traversal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    Left,
    Right,
    Up,
    Down,
}

impl NavKey {
    /// Parse a DOM-style key name ("ArrowLeft", ...)
    pub fn from_key_name(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" => Some(NavKey::Left),
            "ArrowRight" => Some(NavKey::Right),
            "ArrowUp" => Some(NavKey::Up),
            "ArrowDown" => Some(NavKey::Down),
            _ => None,
        }
    }

    /// Signed index offset of this key in the grid
    pub fn offset(&self) -> isize {
        match self {
            NavKey::Left => -1,
            NavKey::Right => 1,
            NavKey::Up => -(GRID_COLUMNS as isize),
            NavKey::Down => GRID_COLUMNS as isize,
        }
    }
}

/// Index focus moves to from `current`, or `None` if the move would leave the list
pub fn navigate(current: usize, key: NavKey, len: usize) -> Option<usize> {
    let target = current.checked_add_signed(key.offset())?;
    (target < len && target != current).then_some(target)
}

/// Selection engine for one ordered list
#[derive(Debug, Clone)]
pub struct SelectionEngine<T> {
    items: Vec<T>,
    state: SelectionState,
}

impl<T: Clone> SelectionEngine<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self {
            items,
            state: SelectionState::default(),
        }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    /// Per-item handle wiring events for index `index`
    pub fn item(&mut self, index: usize) -> ItemHandle<'_, T> {
        ItemHandle {
            engine: self,
            index,
        }
    }

    pub fn is_hovered(&self, index: usize) -> bool {
        self.state.hovered == Some(index)
    }

    pub fn is_shift_highlighted(&self, index: usize) -> bool {
        self.state.highlighted.contains(&index)
    }

    pub fn on_focus(&mut self, index: usize, event: InteractionEvent) {
        self.hover(index, event);
    }

    pub fn on_pointer_enter(&mut self, index: usize, event: InteractionEvent) {
        self.hover(index, event);
    }

    pub fn on_pointer_move(&mut self, index: usize, event: InteractionEvent) {
        self.hover(index, event);
    }

    pub fn on_pointer_leave(&mut self, index: usize, event: InteractionEvent) {
        if event.handled {
            return;
        }
        if self.state.range_end == Some(index) {
            self.state.range_end = None;
            self.state.recompute_highlight();
        }
        self.state.hovered = None;
    }

    /// Resolve an activation (click, Enter) into the items it acts on
    ///
    /// A shift activation on a highlighted index returns the whole highlighted
    /// range in index order; anything else returns the single item. An event
    /// that was already handled returns the single item and leaves the state
    /// untouched, including the anchor.
    pub fn on_activate(&mut self, index: usize, event: InteractionEvent) -> Vec<T> {
        if event.handled {
            return self.single(index);
        }
        if index >= self.items.len() {
            return Vec::new();
        }

        if event.shift && self.is_shift_highlighted(index) {
            let range: Vec<T> = self
                .state
                .highlighted
                .iter()
                .filter_map(|&i| self.items.get(i).cloned())
                .collect();
            self.commit(index);
            return range;
        }

        self.commit(index);
        self.single(index)
    }

    /// Index focus moves to for an arrow key; selection state is not affected
    pub fn focus_target(&self, index: usize, key: NavKey) -> Option<usize> {
        navigate(index, key, self.items.len())
    }

    fn single(&self, index: usize) -> Vec<T> {
        self.items.get(index).cloned().into_iter().collect()
    }

    fn hover(&mut self, index: usize, event: InteractionEvent) {
        if event.handled || index >= self.items.len() {
            return;
        }
        self.state.hovered = Some(index);
        if self.state.range_end != Some(index) {
            self.state.range_end = Some(index);
            self.state.recompute_highlight();
        }
    }

    fn commit(&mut self, index: usize) {
        self.state.last_clicked = Some(index);
        self.state.range_end = Some(index);
        self.state.recompute_highlight();
    }
}

/// Event wiring for a single list item
pub struct ItemHandle<'a, T> {
    engine: &'a mut SelectionEngine<T>,
    index: usize,
}

impl<T: Clone> ItemHandle<'_, T> {
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn is_hovered(&self) -> bool {
        self.engine.is_hovered(self.index)
    }

    pub fn is_shift_highlighted(&self) -> bool {
        self.engine.is_shift_highlighted(self.index)
    }

    pub fn on_focus(&mut self, event: InteractionEvent) {
        self.engine.on_focus(self.index, event);
    }

    pub fn on_pointer_enter(&mut self, event: InteractionEvent) {
        self.engine.on_pointer_enter(self.index, event);
    }

    pub fn on_pointer_move(&mut self, event: InteractionEvent) {
        self.engine.on_pointer_move(self.index, event);
    }

    pub fn on_pointer_leave(&mut self, event: InteractionEvent) {
        self.engine.on_pointer_leave(self.index, event);
    }

    pub fn on_activate(&mut self, event: InteractionEvent) -> Vec<T> {
        self.engine.on_activate(self.index, event)
    }

    pub fn focus_target(&self, key: NavKey) -> Option<usize> {
        self.engine.focus_target(self.index, key)
    }
}

#[cfg(test)]
#[path = "selection_tests.rs"]
mod tests;
