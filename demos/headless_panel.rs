//! Drives a panel with the system clock and scripted dialogs.
//!
//! Run with `RUST_LOG=info cargo run --example headless_panel`.

use std::time::{Duration, Instant};

use led_panel::colors;
use led_panel::ui::{LED_DIAMETER_PX, TITLE_TEXT, WINDOW_TITLE};
use led_panel::{
    ColorPicker, Command, GridCell, IntPrompt, IntegerInput, LedId, LedInteraction, LedPanel,
    LedView, MenuEntry, PanelView, Srgba, TimeDuration, TimeInstant, TimeSource,
};
use log::info;

// ============================================================================
// std time wrappers
// ============================================================================

/// Newtype wrapper for std::time::Duration to implement TimeDuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct StdDuration(Duration);

impl TimeDuration for StdDuration {
    const ZERO: Self = StdDuration(Duration::ZERO);

    fn as_millis(&self) -> u64 {
        self.0.as_millis() as u64
    }

    fn from_millis(millis: u64) -> Self {
        StdDuration(Duration::from_millis(millis))
    }

    fn saturating_sub(self, other: Self) -> Self {
        StdDuration(self.0.saturating_sub(other.0))
    }
}

/// Newtype wrapper for std::time::Instant to implement TimeInstant
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct StdInstant(Instant);

impl TimeInstant for StdInstant {
    type Duration = StdDuration;

    fn duration_since(&self, earlier: Self) -> Self::Duration {
        StdDuration(self.0.saturating_duration_since(earlier.0))
    }

    fn checked_add(self, duration: Self::Duration) -> Option<Self> {
        self.0.checked_add(duration.0).map(StdInstant)
    }
}

struct StdClock;

impl TimeSource<StdInstant> for StdClock {
    fn now(&self) -> StdInstant {
        StdInstant(Instant::now())
    }
}

// ============================================================================
// Console "toolkit"
// ============================================================================

struct ConsoleLed {
    id: LedId,
}

impl LedView for ConsoleLed {
    fn repaint(&mut self, color: Srgba) {
        info!(
            "  paint slot {}: {} alpha {:.2}",
            self.id,
            colors::hex_name(color),
            color.alpha
        );
    }
}

struct ConsoleGrid;

impl PanelView for ConsoleGrid {
    type Led = ConsoleLed;

    fn create_led(&mut self, id: LedId) -> ConsoleLed {
        ConsoleLed { id }
    }

    fn arrange(&mut self, cells: &[GridCell]) {
        let placed: Vec<String> = cells
            .iter()
            .map(|cell| format!("{}@({},{})", cell.id, cell.row, cell.column))
            .collect();
        info!("  grid ({} px LEDs): [{}]", LED_DIAMETER_PX, placed.join(" "));
    }
}

/// Walks the hue wheel, one step per request.
struct HueWheel {
    hue: f32,
}

impl ColorPicker for HueWheel {
    fn pick_color(&mut self, _initial: Srgba, title: &str) -> Option<Srgba> {
        self.hue = (self.hue + 120.0) % 360.0;
        info!("[{}] -> hue {}", title, self.hue);
        Some(colors::hue(self.hue))
    }
}

/// Answers every prompt with a fixed value per title.
struct FixedAnswers;

impl IntegerInput for FixedAnswers {
    fn get_int(&mut self, prompt: &IntPrompt) -> Option<i32> {
        let answer = match prompt.title {
            "Set All Blinking Speed" => 250,
            "Set LEDs Duration" => 2,
            _ => prompt.initial,
        };
        info!("[{}] {} {}", prompt.title, prompt.label, answer);
        Some(answer)
    }
}

fn main() {
    env_logger::init();
    info!("{} | {}", WINDOW_TITLE, TITLE_TEXT);

    let clock = StdClock;
    let mut panel = LedPanel::new(ConsoleGrid, &clock);
    let mut picker = HueWheel { hue: 0.0 };
    let mut input = FixedAnswers;

    let script = [
        Command::TurnAllOn,
        Command::AddLed,
        Command::AddLed,
        Command::AddLed,
        Command::TurnAllOn,
        Command::ChangeAllColor,
        Command::SetAllBlinkSpeed,
        Command::SetAllDuration,
    ];
    for command in script {
        info!("> {}", command);
        if let Some(notice) = panel.run_command(command, &mut picker, &mut input) {
            info!("{:?} [{}] {}", notice.severity, notice.title, notice.message);
        }
    }

    info!("> right-click LED 2, Remove");
    panel.interact(
        LedId(2),
        LedInteraction::Menu(MenuEntry::Remove),
        &mut picker,
        &mut input,
    );

    // Event loop: sleep until the next deadline, until nothing is scheduled
    while let Some(wait) = panel.service_all() {
        std::thread::sleep(wait.0.max(Duration::from_millis(1)));
    }

    info!("> {}", Command::TurnAllOff);
    if let Some(notice) = panel.run_command(Command::TurnAllOff, &mut picker, &mut input) {
        info!("{:?} [{}] {}", notice.severity, notice.title, notice.message);
    }
}
