//! Shared test infrastructure for led-panel integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use std::collections::VecDeque;

use led_panel::{
    ColorPicker, GridCell, IntPrompt, IntegerInput, LedId, LedPanel, LedView, PanelView, Srgba,
    TimeDuration, TimeInstant, TimeSource, VirtualLed,
};

// ============================================================================
// Mock Time Types
// ============================================================================

/// Mock duration type for testing (wraps milliseconds)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestDuration(pub u64);

impl TimeDuration for TestDuration {
    const ZERO: Self = TestDuration(0);

    fn as_millis(&self) -> u64 {
        self.0
    }

    fn from_millis(millis: u64) -> Self {
        TestDuration(millis)
    }

    fn saturating_sub(self, other: Self) -> Self {
        TestDuration(self.0.saturating_sub(other.0))
    }
}

/// Mock instant type for testing
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestInstant(pub u64);

impl TimeInstant for TestInstant {
    type Duration = TestDuration;

    fn duration_since(&self, earlier: Self) -> Self::Duration {
        TestDuration(self.0 - earlier.0)
    }

    fn checked_add(self, duration: Self::Duration) -> Option<Self> {
        Some(TestInstant(self.0 + duration.0))
    }
}

// ============================================================================
// Mock Time Source
// ============================================================================

/// Mock time source with controllable time advancement
pub struct MockTimeSource {
    current_time: core::cell::Cell<TestInstant>,
}

impl MockTimeSource {
    pub fn new() -> Self {
        Self {
            current_time: core::cell::Cell::new(TestInstant(0)),
        }
    }

    /// Advance time by the given number of milliseconds
    pub fn advance_millis(&self, millis: u64) {
        let current = self.current_time.get();
        self.current_time.set(TestInstant(current.0 + millis));
    }

    /// Advance time by the given number of seconds
    pub fn advance_secs(&self, secs: u64) {
        self.advance_millis(secs * 1000);
    }
}

impl TimeSource<TestInstant> for MockTimeSource {
    fn now(&self) -> TestInstant {
        self.current_time.get()
    }
}

// ============================================================================
// Mock Views
// ============================================================================

/// Mock LED visual that records every repaint
pub struct MockView {
    current_color: Srgba,
    color_history: heapless::Vec<Srgba, 32>,
}

impl MockView {
    pub fn new() -> Self {
        Self {
            current_color: Srgba::new(1.0, 1.0, 1.0, 1.0),
            color_history: heapless::Vec::new(),
        }
    }

    pub fn get_last_color(&self) -> Srgba {
        self.current_color
    }

    pub fn color_history(&self) -> &[Srgba] {
        &self.color_history
    }
}

impl LedView for MockView {
    fn repaint(&mut self, color: Srgba) {
        self.current_color = color;
        let _ = self.color_history.push(color);
    }
}

/// Mock grid that keeps the most recent arrangement
#[derive(Default)]
pub struct MockGrid {
    pub created: Vec<LedId>,
    pub cells: Vec<GridCell>,
    pub arrangements: usize,
}

impl PanelView for MockGrid {
    type Led = MockView;

    fn create_led(&mut self, id: LedId) -> MockView {
        self.created.push(id);
        MockView::new()
    }

    fn arrange(&mut self, cells: &[GridCell]) {
        self.cells = cells.to_vec();
        self.arrangements += 1;
    }
}

pub type TestLed<'t> = VirtualLed<'t, TestInstant, MockView, MockTimeSource>;
pub type TestPanel<'t> = LedPanel<'t, TestInstant, MockGrid, MockTimeSource>;

/// Builds a panel holding `count` LEDs, all off
pub fn panel_with(timer: &MockTimeSource, count: usize) -> TestPanel<'_> {
    let mut panel = TestPanel::new(MockGrid::default(), timer);
    for _ in 0..count {
        panel.add_new();
    }
    panel
}

/// Ids of the panel's LEDs in display order
pub fn ids(panel: &TestPanel<'_>) -> Vec<usize> {
    panel.leds().map(|led| led.id().0).collect()
}

// ============================================================================
// Scripted Dialogs
// ============================================================================

/// Color dialog that replays queued answers (`None` = dismissed)
#[derive(Default)]
pub struct ScriptedPicker {
    answers: VecDeque<Option<Srgba>>,
    pub requests: Vec<(Srgba, String)>,
}

impl ScriptedPicker {
    pub fn answering(answers: impl IntoIterator<Item = Option<Srgba>>) -> Self {
        Self {
            answers: answers.into_iter().collect(),
            requests: Vec::new(),
        }
    }
}

impl ColorPicker for ScriptedPicker {
    fn pick_color(&mut self, initial: Srgba, title: &str) -> Option<Srgba> {
        self.requests.push((initial, title.to_string()));
        self.answers.pop_front().flatten()
    }
}

/// Integer dialog that replays queued answers (`None` = dismissed)
#[derive(Default)]
pub struct ScriptedInput {
    answers: VecDeque<Option<i32>>,
    pub prompts: Vec<IntPrompt>,
}

impl ScriptedInput {
    pub fn answering(answers: impl IntoIterator<Item = Option<i32>>) -> Self {
        Self {
            answers: answers.into_iter().collect(),
            prompts: Vec::new(),
        }
    }
}

impl IntegerInput for ScriptedInput {
    fn get_int(&mut self, prompt: &IntPrompt) -> Option<i32> {
        self.prompts.push(*prompt);
        self.answers.pop_front().flatten()
    }
}

// ============================================================================
// Colors
// ============================================================================

pub const RED: Srgba = Srgba::new(1.0, 0.0, 0.0, 1.0);
pub const GREEN: Srgba = Srgba::new(0.0, 1.0, 0.0, 1.0);
pub const BLUE: Srgba = Srgba::new(0.0, 0.0, 1.0, 1.0);
