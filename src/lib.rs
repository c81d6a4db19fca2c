#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`VirtualLed`**: One simulated LED: color, on/off, blink cycle and auto-off timer
//! - **`LedPanel`**: Owns the LEDs, keeps their ids dense and runs the panel-wide commands
//! - **`Command`**: The control buttons (add, all on/off, remove all, recolor, blink, duration, help)
//! - **`LedInteraction`**: Left click or context-menu choice on a single LED
//! - **`LedEvent`**: What an LED reports back to its panel (removed, recolored)
//! - **`LedView`** / **`PanelView`**: Traits to implement for your GUI toolkit's visuals
//! - **`ColorPicker`** / **`IntegerInput`**: Traits to implement for your toolkit's modal dialogs
//! - **`TimeSource`**: Trait to implement for your clock
//! - **`Notice`**: The message box to show after a command
//!
//! The library uses `Srgba<f32>` (0.0-1.0 range) for all colors. Fully
//! transparent means "off".

// Re-export Srgba from palette for user convenience
pub use palette::Srgba;

pub mod colors;
pub mod command;
pub mod led;
pub mod panel;
pub mod time;
pub mod types;
pub mod ui;

pub use colors::{TRANSPARENT, WHITE};
pub use command::{Command, LedEvent, LedInteraction, MenuEntry};
pub use led::{ContextMenu, VirtualLed};
pub use panel::{LedPanel, PanelError};
pub use time::{OneShot, Periodic, TimeDuration, TimeInstant, TimeSource};
pub use types::{GridCell, IntPrompt, LedId, LedState, Outcome, PanelLayout};
pub use ui::{ColorPicker, IntegerInput, LedView, Notice, PanelView, Severity};

/// LEDs per grid row.
pub const GRID_COLUMNS: usize = 5;

/// Upper bound for a blink interval, in milliseconds.
pub const MAX_BLINK_SPEED_MS: u32 = 10_000;

/// Upper bound for an auto-off duration, in seconds.
pub const MAX_DURATION_SECS: u32 = 3600;
