//! A single simulated LED with on/off, blink and auto-off behavior.
//!
//! Provides [`VirtualLed`], which owns its visual and its two timers and
//! reports user requests that concern the whole panel as [`LedEvent`]s.

use crate::colors::{self, TRANSPARENT, WHITE};
use crate::command::{LedEvent, LedInteraction, MenuEntry};
use crate::time::{OneShot, Periodic, TimeDuration, TimeInstant, TimeSource, earliest};
use crate::types::{IntPrompt, LedId, LedState};
use crate::ui::{ColorPicker, IntegerInput, LedView};
use crate::{MAX_BLINK_SPEED_MS, MAX_DURATION_SECS};
use heapless::Vec;
use log::{debug, info};
use palette::Srgba;

/// Context menu of one LED; holds every [`MenuEntry`] at most once.
pub type ContextMenu = Vec<MenuEntry, 4>;

/// One simulated LED.
///
/// The LED is on exactly when its color is not [`TRANSPARENT`]. While on, a
/// positive blink speed alternates the visible color between the color and a
/// dimmed variant; an armed duration timer switches the LED off when it
/// expires. Timers only advance when [`service`](Self::service) is called.
///
/// # Type Parameters
/// * `'t` - Lifetime of the time source reference
/// * `I` - Time instant type
/// * `V` - Visual implementation type
/// * `T` - Time source implementation type
pub struct VirtualLed<'t, I: TimeInstant, V: LedView, T: TimeSource<I>> {
    id: LedId,
    view: V,
    time_source: &'t T,
    color: Srgba,
    blink_speed: u32,
    blink_phase: bool,
    blink_timer: Periodic<I>,
    off_timer: OneShot<I>,
    painted: Srgba,
}

impl<'t, I: TimeInstant, V: LedView, T: TimeSource<I>> VirtualLed<'t, I, V, T> {
    /// Creates an LED that is off and not blinking.
    pub fn new(id: LedId, mut view: V, time_source: &'t T) -> Self {
        view.repaint(TRANSPARENT);

        Self {
            id,
            view,
            time_source,
            color: TRANSPARENT,
            blink_speed: 0,
            blink_phase: true,
            blink_timer: Periodic::new(),
            off_timer: OneShot::new(),
            painted: TRANSPARENT,
        }
    }

    /// Returns the LED's current id.
    pub fn id(&self) -> LedId {
        self.id
    }

    pub(crate) fn set_id(&mut self, id: LedId) {
        self.id = id;
    }

    /// Returns true if the LED shows any color other than transparent.
    pub fn is_on(&self) -> bool {
        !colors::is_transparent(self.color)
    }

    /// Returns the assigned color (transparent when off).
    pub fn color(&self) -> Srgba {
        self.color
    }

    /// Returns the blink interval in milliseconds, 0 when steady.
    pub fn blink_speed(&self) -> u32 {
        self.blink_speed
    }

    /// Returns the current blink phase; `true` is the bright half.
    pub fn blink_phase(&self) -> bool {
        self.blink_phase
    }

    /// Returns true while an auto-off deadline is pending.
    pub fn has_pending_off(&self) -> bool {
        self.off_timer.is_active()
    }

    /// Returns the current state.
    pub fn state(&self) -> LedState {
        if !self.is_on() {
            LedState::Off
        } else if self.blink_timer.is_active() {
            LedState::OnBlinking
        } else {
            LedState::OnSteady
        }
    }

    /// Returns the color that should be visible right now.
    pub fn visible_color(&self) -> Srgba {
        if self.blink_phase || !self.is_on() {
            self.color
        } else {
            colors::dimmed(self.color)
        }
    }

    /// Returns the visual.
    pub fn view(&self) -> &V {
        &self.view
    }

    /// Assigns a color; on/off follows from the value.
    ///
    /// Transparent switches the LED off like [`turn_off`](Self::turn_off).
    /// Any other color while off switches it on in the bright phase and
    /// cancels the auto-off timer.
    pub fn set_color(&mut self, color: Srgba) {
        if colors::is_transparent(color) {
            self.turn_off();
            return;
        }

        let was_on = self.is_on();
        self.color = color;
        if !was_on {
            self.blink_phase = true;
            self.off_timer.stop();
            info!("LED #{} turned on.", self.id);
        }
        self.refresh();
    }

    /// Switches the LED on in white. No-op if already on.
    pub fn turn_on(&mut self) {
        if self.is_on() {
            return;
        }

        self.set_color(WHITE);
    }

    /// Switches the LED off. No-op if already off.
    ///
    /// Stops blinking but keeps the blink speed.
    pub fn turn_off(&mut self) {
        if !self.is_on() {
            return;
        }

        self.blink_timer.stop();
        self.off_timer.stop();
        self.blink_phase = true;
        self.color = TRANSPARENT;
        self.refresh();
        info!("LED #{} turned off.", self.id);
    }

    /// Switches the LED off if it is on, on (white) otherwise.
    pub fn toggle(&mut self) {
        if self.is_on() {
            self.turn_off();
        } else {
            self.turn_on();
        }
    }

    /// Sets the blink interval in milliseconds; 0 stops blinking.
    ///
    /// Restarts the blink cycle whether or not the LED is on. Callers clamp
    /// the value to `0..=MAX_BLINK_SPEED_MS`.
    pub fn set_blink_speed(&mut self, millis: u32) {
        self.blink_speed = millis;
        if millis > 0 {
            let now = self.time_source.now();
            self.blink_timer
                .start(now, I::Duration::from_millis(u64::from(millis)));
        } else {
            self.blink_timer.stop();
            self.blink_phase = true;
        }
        self.refresh();
    }

    /// Schedules the LED to switch off after `seconds`, replacing any
    /// pending deadline. Zero leaves the current deadline untouched.
    pub fn set_duration(&mut self, seconds: u32) {
        if seconds == 0 {
            return;
        }

        let now = self.time_source.now();
        self.off_timer
            .start(now, I::Duration::from_millis(u64::from(seconds) * 1000));
    }

    /// Cancels a pending auto-off deadline without touching anything else.
    pub fn stop_off_timer(&mut self) {
        self.off_timer.stop();
    }

    /// Fires due timers and returns how long until the next one is due.
    ///
    /// # Returns
    /// * `Some(duration)` - Call again after this long
    /// * `None` - No timer is running
    pub fn service(&mut self) -> Option<I::Duration> {
        let now = self.time_source.now();

        if self.blink_timer.poll(now) % 2 == 1 {
            self.blink_phase = !self.blink_phase;
        }

        if self.off_timer.poll(now) {
            debug!("LED #{} duration elapsed.", self.id);
            self.turn_off();
        }

        self.refresh();
        earliest(self.blink_timer.remaining(now), self.off_timer.remaining(now))
    }

    /// Entries the context menu should offer in the current state.
    pub fn context_menu(&self) -> ContextMenu {
        if self.is_on() {
            ContextMenu::from_array([
                MenuEntry::Remove,
                MenuEntry::ChangeColor,
                MenuEntry::SetBlinkSpeed,
                MenuEntry::SetDuration,
            ])
        } else {
            ContextMenu::from_array([MenuEntry::Remove])
        }
    }

    /// Handles a mouse interaction, asking the dialogs for input as needed.
    ///
    /// Returns the event the owning panel must act on, if any. Menu entries
    /// other than [`MenuEntry::Remove`] are ignored while the LED is off.
    pub fn interact<C, N>(
        &mut self,
        interaction: LedInteraction,
        picker: &mut C,
        input: &mut N,
    ) -> Option<LedEvent>
    where
        C: ColorPicker + ?Sized,
        N: IntegerInput + ?Sized,
    {
        match interaction {
            LedInteraction::PrimaryClick => {
                self.toggle();
                None
            }
            LedInteraction::Menu(MenuEntry::Remove) => Some(LedEvent::Removed(self.id)),
            LedInteraction::Menu(entry) if !self.is_on() => {
                debug!("LED #{} is off, ignoring {:?}.", self.id, entry);
                None
            }
            LedInteraction::Menu(MenuEntry::ChangeColor) => {
                let color = picker.pick_color(self.color, "Select LED Color")?;
                self.set_color(color);
                Some(LedEvent::ColorChanged(self.id, color))
            }
            LedInteraction::Menu(MenuEntry::SetBlinkSpeed) => {
                let prompt = IntPrompt {
                    title: "Set Blinking Speed",
                    label: "Speed (ms):",
                    initial: i32::try_from(self.blink_speed).unwrap_or(i32::MAX),
                    min: 0,
                    max: MAX_BLINK_SPEED_MS as i32,
                };
                let speed = prompt.clamp(input.get_int(&prompt)?) as u32;
                self.set_blink_speed(speed);
                info!("LED #{} blinking speed set to {} ms.", self.id, speed);
                None
            }
            LedInteraction::Menu(MenuEntry::SetDuration) => {
                let prompt = IntPrompt {
                    title: "Set Duration",
                    label: "Duration (seconds):",
                    initial: 0,
                    min: 1,
                    max: MAX_DURATION_SECS as i32,
                };
                let seconds = prompt.clamp(input.get_int(&prompt)?) as u32;
                self.set_duration(seconds);
                info!("LED #{} duration set to {} seconds.", self.id, seconds);
                None
            }
        }
    }

    /// Pushes the visible color to the view if it changed.
    fn refresh(&mut self) {
        let visible = self.visible_color();
        if visible != self.painted {
            self.view.repaint(visible);
            self.painted = visible;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::Cell;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    struct TestDuration(u64);

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

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    struct TestInstant(u64);

    impl TimeInstant for TestInstant {
        type Duration = TestDuration;

        fn duration_since(&self, earlier: Self) -> Self::Duration {
            TestDuration(self.0 - earlier.0)
        }

        fn checked_add(self, duration: Self::Duration) -> Option<Self> {
            Some(TestInstant(self.0 + duration.0))
        }
    }

    struct MockTimeSource {
        current_time: Cell<TestInstant>,
    }

    impl MockTimeSource {
        fn new() -> Self {
            Self {
                current_time: Cell::new(TestInstant(0)),
            }
        }

        fn advance(&self, millis: u64) {
            let current = self.current_time.get();
            self.current_time.set(TestInstant(current.0 + millis));
        }
    }

    impl TimeSource<TestInstant> for MockTimeSource {
        fn now(&self) -> TestInstant {
            self.current_time.get()
        }
    }

    // Mock view that counts repaints
    struct MockView {
        color: Srgba,
        repaints: usize,
    }

    impl MockView {
        fn new() -> Self {
            Self {
                color: WHITE,
                repaints: 0,
            }
        }
    }

    impl LedView for MockView {
        fn repaint(&mut self, color: Srgba) {
            self.color = color;
            self.repaints += 1;
        }
    }

    type TestLed<'t> = VirtualLed<'t, TestInstant, MockView, MockTimeSource>;

    const RED: Srgba = Srgba::new(1.0, 0.0, 0.0, 1.0);

    #[test]
    fn new_led_is_off_and_painted_transparent() {
        let timer = MockTimeSource::new();
        let led = TestLed::new(LedId(1), MockView::new(), &timer);

        assert!(!led.is_on());
        assert_eq!(led.state(), LedState::Off);
        assert_eq!(led.view().color, TRANSPARENT);
    }

    #[test]
    fn set_color_only_repaints_on_change() {
        let timer = MockTimeSource::new();
        let mut led = TestLed::new(LedId(1), MockView::new(), &timer);

        led.set_color(RED);
        led.set_color(RED);

        // One repaint from construction, one for RED
        assert_eq!(led.view().repaints, 2);
    }

    #[test]
    fn blink_toggles_phase_each_interval() {
        let timer = MockTimeSource::new();
        let mut led = TestLed::new(LedId(1), MockView::new(), &timer);
        led.set_color(RED);
        led.set_blink_speed(100);
        assert_eq!(led.state(), LedState::OnBlinking);

        timer.advance(100);
        assert_eq!(led.service(), Some(TestDuration(100)));
        assert!(!led.blink_phase());
        assert_eq!(led.view().color, colors::dimmed(RED));

        timer.advance(100);
        led.service();
        assert!(led.blink_phase());
        assert_eq!(led.view().color, RED);
    }

    #[test]
    fn late_service_keeps_blink_parity() {
        let timer = MockTimeSource::new();
        let mut led = TestLed::new(LedId(1), MockView::new(), &timer);
        led.set_color(RED);
        led.set_blink_speed(100);

        // Three ticks missed: odd count, phase flips once
        timer.advance(350);
        led.service();
        assert!(!led.blink_phase());
    }

    #[test]
    fn service_reports_nearest_deadline() {
        let timer = MockTimeSource::new();
        let mut led = TestLed::new(LedId(1), MockView::new(), &timer);
        assert_eq!(led.service(), None);

        led.turn_on();
        led.set_duration(1);
        led.set_blink_speed(300);
        assert_eq!(led.service(), Some(TestDuration(300)));

        timer.advance(900);
        assert_eq!(led.service(), Some(TestDuration(100)));
    }

    #[test]
    fn context_menu_depends_on_state() {
        let timer = MockTimeSource::new();
        let mut led = TestLed::new(LedId(1), MockView::new(), &timer);
        assert_eq!(led.context_menu().as_slice(), &[MenuEntry::Remove]);

        led.turn_on();
        assert_eq!(
            led.context_menu().as_slice(),
            &[
                MenuEntry::Remove,
                MenuEntry::ChangeColor,
                MenuEntry::SetBlinkSpeed,
                MenuEntry::SetDuration
            ]
        );
    }
}
