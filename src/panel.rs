use crate::colors::{self, WHITE};
use crate::command::{Command, LedEvent, LedInteraction};
use crate::led::VirtualLed;
use crate::time::{TimeInstant, TimeSource, earliest};
use crate::types::{GridCell, IntPrompt, LedId, Outcome, PanelLayout};
use crate::ui::{ColorPicker, IntegerInput, Notice, PanelView};
use crate::{MAX_BLINK_SPEED_MS, MAX_DURATION_SECS};
use log::{info, warn};
use palette::Srgba;

/// Reasons a panel command is refused.
///
/// None of these change the panel; the UI shows them as a warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelError {
    /// The panel holds no LEDs.
    NoLeds(Command),

    /// The command needs at least one LED that is on.
    NoneOn(Command),

    /// Every LED is already on.
    AllAlreadyOn,
}

impl core::fmt::Display for PanelError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            PanelError::NoLeds(command) => {
                write!(f, "No LEDs available to {}.", command.action())
            }
            PanelError::NoneOn(Command::ChangeAllColor) => {
                write!(f, "At least one LED must be on to change colors.")
            }
            PanelError::NoneOn(command) => {
                write!(f, "At least one LED must be on to {}.", command.action())
            }
            PanelError::AllAlreadyOn => {
                write!(f, "All LEDs are already turned on.")
            }
        }
    }
}

impl std::error::Error for PanelError {}

/// Owns an ordered set of virtual LEDs and runs the panel-wide commands.
///
/// Insertion order is display order. Ids are kept dense (`1..=len`) by
/// renumbering after every removal, so the next id is always `len + 1`.
/// Every membership change re-arranges the view.
///
/// # Type Parameters
/// * `'t` - Lifetime of the time source reference
/// * `I` - Time instant type
/// * `P` - Panel view implementation type
/// * `T` - Time source implementation type
pub struct LedPanel<'t, I: TimeInstant, P: PanelView, T: TimeSource<I>> {
    leds: Vec<VirtualLed<'t, I, P::Led, T>>,
    view: P,
    layout: PanelLayout,
    time_source: &'t T,
}

impl<'t, I, P, T> LedPanel<'t, I, P, T>
where
    I: TimeInstant,
    P: PanelView,
    T: TimeSource<I>,
{
    /// Creates an empty panel with the default grid.
    pub fn new(view: P, time_source: &'t T) -> Self {
        Self::with_layout(view, PanelLayout::default(), time_source)
    }

    /// Creates an empty panel with a custom grid.
    pub fn with_layout(view: P, layout: PanelLayout, time_source: &'t T) -> Self {
        Self {
            leds: Vec::new(),
            view,
            layout,
            time_source,
        }
    }

    /// Number of LEDs on the panel.
    pub fn len(&self) -> usize {
        self.leds.len()
    }

    /// Returns true if the panel holds no LEDs.
    pub fn is_empty(&self) -> bool {
        self.leds.is_empty()
    }

    /// Id the next added LED will get.
    pub fn next_id(&self) -> LedId {
        LedId(self.leds.len() + 1)
    }

    /// Returns true if an LED with this id exists.
    pub fn contains(&self, id: LedId) -> bool {
        self.find_by_id(id).is_some()
    }

    /// LEDs in display order.
    pub fn leds(&self) -> impl Iterator<Item = &VirtualLed<'t, I, P::Led, T>> {
        self.leds.iter()
    }

    /// Returns the panel view.
    pub fn view(&self) -> &P {
        &self.view
    }

    /// Looks an LED up by id.
    pub fn find_by_id(&self, id: LedId) -> Option<&VirtualLed<'t, I, P::Led, T>> {
        self.leds.iter().find(|led| led.id() == id)
    }

    fn find_by_id_mut(&mut self, id: LedId) -> Option<&mut VirtualLed<'t, I, P::Led, T>> {
        self.leds.iter_mut().find(|led| led.id() == id)
    }

    /// Grid position of every LED, in display order.
    pub fn layout(&self) -> Vec<GridCell> {
        self.leds
            .iter()
            .enumerate()
            .map(|(index, led)| {
                let (row, column) = self.layout.position(index);
                GridCell {
                    id: led.id(),
                    row,
                    column,
                }
            })
            .collect()
    }

    /// Recomputes the grid and hands it to the view.
    pub fn layout_refresh(&mut self) {
        let cells = self.layout();
        self.view.arrange(&cells);
    }

    /// Reassigns ids `1..=len` in display order.
    pub fn renumber(&mut self) {
        for (index, led) in self.leds.iter_mut().enumerate() {
            led.set_id(LedId(index + 1));
        }
    }

    /// Appends a new LED, switched off, and returns its id.
    pub fn add_new(&mut self) -> LedId {
        let id = self.next_id();
        let view = self.view.create_led(id);
        self.leds.push(VirtualLed::new(id, view, self.time_source));
        self.layout_refresh();
        info!("LED #{} added.", id);
        id
    }

    /// Removes the LED with this id and renumbers the rest.
    ///
    /// Unknown ids are ignored. Returns true if an LED was removed.
    pub fn remove(&mut self, id: LedId) -> bool {
        let Some(index) = self.leds.iter().position(|led| led.id() == id) else {
            return false;
        };

        self.leds.remove(index);
        self.renumber();
        self.layout_refresh();
        info!("LED #{} removed.", id);
        true
    }

    /// Sets the color of one LED. Unknown ids are ignored.
    pub fn set_color_for(&mut self, id: LedId, color: Srgba) {
        if let Some(led) = self.find_by_id_mut(id) {
            led.set_color(color);
            info!("LED #{} color changed to {}.", id, colors::hex_name(color));
        }
    }

    /// Applies an event raised by one of the LEDs.
    pub fn handle_event(&mut self, event: LedEvent) {
        match event {
            LedEvent::Removed(id) => {
                self.remove(id);
            }
            LedEvent::ColorChanged(id, color) => self.set_color_for(id, color),
        }
    }

    /// Routes a mouse interaction to one LED and applies what it reports.
    ///
    /// Returns the event the LED raised, if any. Unknown ids are ignored.
    pub fn interact<C, N>(
        &mut self,
        id: LedId,
        interaction: LedInteraction,
        picker: &mut C,
        input: &mut N,
    ) -> Option<LedEvent>
    where
        C: ColorPicker + ?Sized,
        N: IntegerInput + ?Sized,
    {
        let event = self.find_by_id_mut(id)?.interact(interaction, picker, input)?;
        self.handle_event(event);
        Some(event)
    }

    /// Left click on one LED: toggles it.
    pub fn click(&mut self, id: LedId) {
        if let Some(led) = self.find_by_id_mut(id) {
            led.toggle();
        }
    }

    /// Switches every LED on and cancels every pending auto-off.
    ///
    /// LEDs that are off come on in white; LEDs already on keep their color.
    ///
    /// # Errors
    /// * `NoLeds` - The panel is empty
    /// * `AllAlreadyOn` - No LED was off
    pub fn turn_all_on(&mut self) -> Result<Outcome, PanelError> {
        if self.leds.is_empty() {
            return reject(PanelError::NoLeds(Command::TurnAllOn));
        }
        if self.leds.iter().all(|led| led.is_on()) {
            return reject(PanelError::AllAlreadyOn);
        }

        for led in &mut self.leds {
            if !led.is_on() {
                led.set_color(WHITE);
            }
            led.stop_off_timer();
        }
        info!("All LEDs turned on.");
        Ok(Outcome::Applied)
    }

    /// Switches every LED off.
    ///
    /// Returns `Outcome::Unchanged` when no LED was on.
    ///
    /// # Errors
    /// * `NoLeds` - The panel is empty
    pub fn turn_all_off(&mut self) -> Result<Outcome, PanelError> {
        if self.leds.is_empty() {
            return reject(PanelError::NoLeds(Command::TurnAllOff));
        }

        let mut any_on = false;
        for led in self.leds.iter_mut().filter(|led| led.is_on()) {
            led.turn_off();
            any_on = true;
        }

        if any_on {
            info!("All LEDs turned off.");
            Ok(Outcome::Applied)
        } else {
            warn!("All LEDs were already off.");
            Ok(Outcome::Unchanged)
        }
    }

    /// Removes every LED; the next id starts over at 1.
    ///
    /// # Errors
    /// * `NoLeds` - The panel is empty
    pub fn remove_all(&mut self) -> Result<Outcome, PanelError> {
        if self.leds.is_empty() {
            return reject(PanelError::NoLeds(Command::RemoveAll));
        }

        self.leds.clear();
        self.layout_refresh();
        info!("All LEDs have been removed.");
        Ok(Outcome::Applied)
    }

    /// Asks for one color and applies it to every LED that is on.
    ///
    /// # Errors
    /// * `NoLeds` - The panel is empty
    /// * `NoneOn` - No LED is on
    pub fn change_all_color<C>(&mut self, picker: &mut C) -> Result<Outcome, PanelError>
    where
        C: ColorPicker + ?Sized,
    {
        const COMMAND: Command = Command::ChangeAllColor;

        if self.leds.is_empty() {
            return reject(PanelError::NoLeds(COMMAND));
        }
        if !self.any_on() {
            return reject(PanelError::NoneOn(COMMAND));
        }

        let Some(color) = picker.pick_color(WHITE, "Select Color For All LEDs") else {
            return Ok(Outcome::Cancelled);
        };

        for led in self.leds.iter_mut().filter(|led| led.is_on()) {
            led.set_color(color);
        }
        info!("Changed color of all on LEDs to {}.", colors::hex_name(color));
        Ok(Outcome::Applied)
    }

    /// Asks for a blink interval and applies it to every LED that is on.
    ///
    /// # Errors
    /// * `NoLeds` - The panel is empty
    /// * `NoneOn` - No LED is on or has a blink speed set
    pub fn set_all_blink_speed<N>(&mut self, input: &mut N) -> Result<Outcome, PanelError>
    where
        N: IntegerInput + ?Sized,
    {
        const COMMAND: Command = Command::SetAllBlinkSpeed;

        if self.leds.is_empty() {
            return reject(PanelError::NoLeds(COMMAND));
        }
        if !self.leds.iter().any(|led| led.is_on() || led.blink_speed() > 0) {
            return reject(PanelError::NoneOn(COMMAND));
        }

        let prompt = IntPrompt {
            title: "Set All Blinking Speed",
            label: "Speed (ms):",
            initial: 0,
            min: 0,
            max: MAX_BLINK_SPEED_MS as i32,
        };
        let Some(speed) = input.get_int(&prompt) else {
            return Ok(Outcome::Cancelled);
        };
        let speed = prompt.clamp(speed) as u32;

        for led in self.leds.iter_mut().filter(|led| led.is_on()) {
            led.set_blink_speed(speed);
        }
        info!("Blinking speed set for all on LEDs to {} ms.", speed);
        Ok(Outcome::Applied)
    }

    /// Asks for an auto-off delay and applies it to every LED that is on.
    ///
    /// A delay of 0 leaves existing deadlines in place.
    ///
    /// # Errors
    /// * `NoLeds` - The panel is empty
    /// * `NoneOn` - No LED is on
    pub fn set_all_duration<N>(&mut self, input: &mut N) -> Result<Outcome, PanelError>
    where
        N: IntegerInput + ?Sized,
    {
        const COMMAND: Command = Command::SetAllDuration;

        if self.leds.is_empty() {
            return reject(PanelError::NoLeds(COMMAND));
        }
        if !self.any_on() {
            return reject(PanelError::NoneOn(COMMAND));
        }

        let prompt = IntPrompt {
            title: "Set LEDs Duration",
            label: "Duration (seconds):",
            initial: 0,
            min: 0,
            max: MAX_DURATION_SECS as i32,
        };
        let Some(seconds) = input.get_int(&prompt) else {
            return Ok(Outcome::Cancelled);
        };
        let seconds = prompt.clamp(seconds) as u32;

        for led in self.leds.iter_mut().filter(|led| led.is_on()) {
            led.set_duration(seconds);
        }
        info!("Duration set for all on LEDs to {} seconds.", seconds);
        Ok(Outcome::Applied)
    }

    /// Runs a control-button command and returns the dialog to show, if any.
    pub fn run_command<C, N>(
        &mut self,
        command: Command,
        picker: &mut C,
        input: &mut N,
    ) -> Option<Notice>
    where
        C: ColorPicker + ?Sized,
        N: IntegerInput + ?Sized,
    {
        let result = match command {
            Command::AddLed => {
                self.add_new();
                Ok(Outcome::Applied)
            }
            Command::TurnAllOn => self.turn_all_on(),
            Command::TurnAllOff => self.turn_all_off(),
            Command::RemoveAll => self.remove_all(),
            Command::ChangeAllColor => self.change_all_color(picker),
            Command::SetAllBlinkSpeed => self.set_all_blink_speed(input),
            Command::SetAllDuration => self.set_all_duration(input),
            Command::Help => {
                info!("Help requested.");
                return Some(Notice::help());
            }
        };
        Notice::for_result(command, &result)
    }

    /// Services every LED and returns how long the host may wait before
    /// calling again.
    ///
    /// # Returns
    /// * `Some(duration)` - The nearest timer deadline across all LEDs
    /// * `None` - No LED has a running timer
    pub fn service_all(&mut self) -> Option<I::Duration> {
        self.leds
            .iter_mut()
            .fold(None, |next, led| earliest(next, led.service()))
    }

    fn any_on(&self) -> bool {
        self.leds.iter().any(|led| led.is_on())
    }
}

fn reject(err: PanelError) -> Result<Outcome, PanelError> {
    warn!("{}", err);
    Err(err)
}
