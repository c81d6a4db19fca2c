//! Core value types shared by LEDs and the panel.

use crate::GRID_COLUMNS;

/// Position-based identifier of an LED within a panel.
///
/// Ids are 1-based and always dense: after any removal the panel renumbers
/// its LEDs so the ids are exactly `1..=len`. An id therefore names a slot,
/// not a particular LED over its whole lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LedId(pub usize);

impl From<usize> for LedId {
    fn from(id: usize) -> Self {
        LedId(id)
    }
}

impl From<LedId> for usize {
    fn from(id: LedId) -> Self {
        id.0
    }
}

impl core::fmt::Display for LedId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The observable state of a single LED.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedState {
    /// Showing the transparent "off" color.
    Off,
    /// On and showing its color continuously.
    OnSteady,
    /// On and alternating between its color and a dimmed variant.
    OnBlinking,
}

/// Result of a command that passed its preconditions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The command changed the panel.
    Applied,
    /// The user dismissed the dialog; nothing was changed.
    Cancelled,
    /// Every LED was already in the requested state.
    Unchanged,
}

/// Where an LED sits in the display grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridCell {
    pub id: LedId,
    pub row: usize,
    pub column: usize,
}

/// Fixed-column grid arrangement, filled row by row in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelLayout {
    columns: usize,
}

impl PanelLayout {
    /// Creates a layout with `columns` cells per row (at least one).
    pub const fn new(columns: usize) -> Self {
        Self {
            columns: if columns == 0 { 1 } else { columns },
        }
    }

    /// Cells per row.
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Row and column of the LED at `index` in display order.
    #[inline]
    pub fn position(&self, index: usize) -> (usize, usize) {
        (index / self.columns, index % self.columns)
    }
}

impl Default for PanelLayout {
    fn default() -> Self {
        Self::new(GRID_COLUMNS)
    }
}

/// Parameters of a modal integer-input request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntPrompt {
    pub title: &'static str,
    pub label: &'static str,
    pub initial: i32,
    pub min: i32,
    pub max: i32,
}

impl IntPrompt {
    /// Forces an answer into `min..=max`.
    #[inline]
    pub fn clamp(&self, value: i32) -> i32 {
        value.clamp(self.min, self.max)
    }
}
