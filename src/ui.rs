//! Seams to the GUI toolkit and the user-facing texts.
//!
//! The toolkit owns windows, dialogs and painting. The panel only needs to
//! ask for a color, ask for an integer, push a repaint, and describe where
//! each LED goes; those needs are the traits below.

use crate::command::Command;
use crate::panel::PanelError;
use crate::types::{GridCell, IntPrompt, LedId, Outcome};
use palette::Srgba;

/// Window title of the application.
pub const WINDOW_TITLE: &str = "Pilluminate (Group 3)";

/// Heading shown above the control buttons.
pub const TITLE_TEXT: &str = "LED Controller";

/// Diameter of a circular LED indicator, in pixels.
pub const LED_DIAMETER_PX: u32 = 50;

/// Text of the help dialog.
pub const HELP_TEXT: &str = "\
Pilluminate (Group 3) - LED Controller

Add LED: Adds a new LED to the display
Turn All LEDs On: Turns all the LEDs on
Turn All LEDs Off: Turns all the LEDs off
Remove All LEDs: Removes all the LEDs from the display
Change All Colors: Changes the color of all on LEDs present on the display
Set All Blink Speed: Changes the blinking speed of all on LEDs present on the display
Set All Duration: Changes the duration of all on LEDs present on the display
Help: Shows this message

Left-click an LED to turn it on or off. Right-click an LED to remove it \
(on or off), or to change its color, blinking speed or duration (on only).";

/// Visual of a single LED.
pub trait LedView {
    /// Paints the indicator with the color that should be visible now.
    ///
    /// Only called when that color actually changes.
    fn repaint(&mut self, color: Srgba);
}

/// The area that holds the LED visuals.
pub trait PanelView {
    /// Visual type created for each LED.
    type Led: LedView;

    /// Creates the visual for a newly added LED.
    fn create_led(&mut self, id: LedId) -> Self::Led;

    /// Places every LED visual; `cells` is in display order.
    fn arrange(&mut self, cells: &[GridCell]);
}

/// Modal color dialog.
pub trait ColorPicker {
    /// Returns the chosen color, or `None` if the dialog was dismissed.
    fn pick_color(&mut self, initial: Srgba, title: &str) -> Option<Srgba>;
}

/// Modal integer dialog.
pub trait IntegerInput {
    /// Returns the entered value, or `None` if the dialog was dismissed.
    fn get_int(&mut self, prompt: &IntPrompt) -> Option<i32>;
}

/// How prominently a notice should be shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Warning,
}

/// A blocking message box the UI should show after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub severity: Severity,
    pub title: &'static str,
    pub message: String,
}

impl Notice {
    /// The help dialog.
    pub fn help() -> Self {
        Self {
            severity: Severity::Info,
            title: "Help",
            message: HELP_TEXT.into(),
        }
    }

    /// The dialog to show for a command result, if any.
    ///
    /// Successes and cancelled dialogs are silent. Precondition failures and
    /// ineffective commands produce a warning.
    pub fn for_result(command: Command, result: &Result<Outcome, PanelError>) -> Option<Self> {
        match result {
            Ok(Outcome::Applied) | Ok(Outcome::Cancelled) => None,
            Ok(Outcome::Unchanged) => Some(Self {
                severity: Severity::Warning,
                title: "Operation Ineffective",
                message: match command {
                    Command::TurnAllOff => "All LEDs are already off.".into(),
                    other => format!("Nothing to {}.", other.action()),
                },
            }),
            Err(err) => Some(Self {
                severity: Severity::Warning,
                title: "Operation Failed",
                message: err.to_string(),
            }),
        }
    }
}
