//! User commands and the events LEDs report back to their panel.

use crate::types::LedId;
use palette::Srgba;

/// Panel-wide commands, one per control button, in button order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    AddLed,
    TurnAllOn,
    TurnAllOff,
    RemoveAll,
    ChangeAllColor,
    SetAllBlinkSpeed,
    SetAllDuration,
    Help,
}

impl Command {
    /// All commands in the order their buttons are laid out.
    pub const ALL: [Command; 8] = [
        Command::AddLed,
        Command::TurnAllOn,
        Command::TurnAllOff,
        Command::RemoveAll,
        Command::ChangeAllColor,
        Command::SetAllBlinkSpeed,
        Command::SetAllDuration,
        Command::Help,
    ];

    /// Button caption.
    pub fn label(self) -> &'static str {
        match self {
            Command::AddLed => "Add LED",
            Command::TurnAllOn => "Turn All LEDs On",
            Command::TurnAllOff => "Turn All LEDs Off",
            Command::RemoveAll => "Remove All LEDs",
            Command::ChangeAllColor => "Change All Colors",
            Command::SetAllBlinkSpeed => "Set All Blink Speed",
            Command::SetAllDuration => "Set All Duration",
            Command::Help => "Help",
        }
    }

    /// What the command does, phrased to follow "to".
    pub(crate) fn action(self) -> &'static str {
        match self {
            Command::AddLed => "add an LED",
            Command::TurnAllOn => "turn on",
            Command::TurnAllOff => "turn off",
            Command::RemoveAll => "remove",
            Command::ChangeAllColor => "change color",
            Command::SetAllBlinkSpeed => "set blinking speed",
            Command::SetAllDuration => "set duration",
            Command::Help => "show help",
        }
    }
}

impl core::fmt::Display for Command {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

/// Entries of the per-LED context menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuEntry {
    /// Always offered.
    Remove,
    /// Offered only while the LED is on.
    ChangeColor,
    /// Offered only while the LED is on.
    SetBlinkSpeed,
    /// Offered only while the LED is on.
    SetDuration,
}

impl MenuEntry {
    /// Menu caption.
    pub fn label(self) -> &'static str {
        match self {
            MenuEntry::Remove => "Remove",
            MenuEntry::ChangeColor => "Change Color",
            MenuEntry::SetBlinkSpeed => "Set Blinking Speed",
            MenuEntry::SetDuration => "Set Duration",
        }
    }
}

/// Mouse interaction with a single LED.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedInteraction {
    /// Left click: toggles on/off.
    PrimaryClick,
    /// A context-menu entry was chosen.
    Menu(MenuEntry),
}

/// Notifications an LED raises for its owning panel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LedEvent {
    /// The user asked for this LED to be removed.
    Removed(LedId),
    /// The user picked a new color for this LED.
    ColorChanged(LedId, Srgba),
}
