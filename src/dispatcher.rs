//! Mode dispatcher
//!
//! The foreground render loop. Each iteration reads the enable flag and mode
//! byte, renders exactly one frame of the selected effect and reports how long
//! to sleep before the next iteration. The caller does the sleeping, so the
//! dispatcher works with any timer; [`Dispatcher::run`] is the ready-made
//! `embassy-time` loop.
//!
//! # Usage
//!
//! ```ignore
//! static REGISTERS: RegisterBank = RegisterBank::new();
//!
//! let mut dispatcher = Dispatcher::new(&REGISTERS, FrameBuffer::new(driver), DispatcherConfig::default());
//! dispatcher.boot();
//!
//! loop {
//!     let result = dispatcher.tick();
//!     sleep_ms(result.sleep_duration.as_millis());
//! }
//! ```

use embassy_time::{Duration, Timer};

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::color::Rgb;
use crate::effect::{EffectSlot, FireEffect, Mode, RippleEffect};
use crate::frame::PixelSink;
use crate::registers::RegisterBank;
use crate::topology::CENTER_PIXEL;

/// Poll interval of the disabled flag
pub const DEFAULT_IDLE_INTERVAL: Duration = Duration::from_millis(250);

/// Last frame of the automatic ripple phase (exclusive)
pub const DEFAULT_RIPPLE_FRAMES: u32 = 312;

/// Frame at which the automatic timeline switches the device off
pub const DEFAULT_FIRE_FRAMES_END: u32 = 10_000;

/// Dim red shown on the center pixel at start-up
pub const DEFAULT_BOOT_COLOR: Rgb = Rgb { r: 3, g: 0, b: 0 };

/// Phase of the automatic timeline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AutoPhase {
    Ripple,
    Fire,
    /// Timeline over; the device parks on ripple and disables itself
    Done,
}

/// Frame thresholds of the automatic timeline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutomaticTimeline {
    /// Frames `0..ripple_frames` render ripple
    pub ripple_frames: u32,
    /// Frames `ripple_frames..fire_frames_end` render fire
    pub fire_frames_end: u32,
}

impl AutomaticTimeline {
    pub const fn phase(&self, frame: u32) -> AutoPhase {
        if frame < self.ripple_frames {
            AutoPhase::Ripple
        } else if frame < self.fire_frames_end {
            AutoPhase::Fire
        } else {
            AutoPhase::Done
        }
    }
}

impl Default for AutomaticTimeline {
    fn default() -> Self {
        Self {
            ripple_frames: DEFAULT_RIPPLE_FRAMES,
            fire_frames_end: DEFAULT_FIRE_FRAMES_END,
        }
    }
}

/// Configuration for the dispatcher
#[derive(Debug, Clone)]
pub struct DispatcherConfig {
    /// Sleep between polls while disabled
    pub idle_interval: Duration,
    /// Thresholds of the automatic mode
    pub timeline: AutomaticTimeline,
    /// Pixel and color lit by [`Dispatcher::boot`]
    pub boot_indicator: Option<(u8, Rgb)>,
}

impl Default for DispatcherConfig {
    fn default() -> Self {
        Self {
            idle_interval: DEFAULT_IDLE_INTERVAL,
            timeline: AutomaticTimeline::default(),
            boot_indicator: Some((CENTER_PIXEL, DEFAULT_BOOT_COLOR)),
        }
    }
}

/// What the dispatcher did in an iteration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchState {
    Disabled,
    Automatic(AutoPhase),
    Fire,
    PieChart,
    NightSky,
    Rainbow,
    Ripple,
}

impl DispatchState {
    const fn from_mode(mode: Mode, phase: AutoPhase) -> Self {
        match mode {
            Mode::Automatic => Self::Automatic(phase),
            Mode::Fire => Self::Fire,
            Mode::PieChart => Self::PieChart,
            Mode::NightSky => Self::NightSky,
            Mode::Rainbow => Self::Rainbow,
            Mode::Ripple => Self::Ripple,
        }
    }
}

/// Result of one dispatcher iteration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameResult {
    /// State the iteration ran in
    pub state: DispatchState,
    /// Frame number rendered, if any
    pub frame: Option<u32>,
    /// How long to wait before the next iteration
    pub sleep_duration: Duration,
}

/// Mode dispatcher - the render loop
pub struct Dispatcher<'a, S: PixelSink> {
    registers: &'a RegisterBank,
    sink: S,
    config: DispatcherConfig,

    // Internal state
    frame: u32,
    generation: u32,
    state: Option<DispatchState>,
    powered: Option<bool>,
}

impl<'a, S: PixelSink> Dispatcher<'a, S> {
    /// Create a dispatcher reading `registers` and drawing into `sink`
    pub fn new(registers: &'a RegisterBank, sink: S, config: DispatcherConfig) -> Self {
        Self {
            registers,
            sink,
            generation: registers.generation(),
            config,
            frame: 0,
            state: None,
            powered: None,
        }
    }

    /// Show the boot indicator and set the power line
    pub fn boot(&mut self) {
        self.update_power(!self.registers.is_disabled());

        self.sink.clear();
        if let Some((pixel, color)) = self.config.boot_indicator {
            self.sink.set_pixel(pixel, color);
        }
        self.sink.flush();
    }

    /// Run one iteration
    ///
    /// Renders and flushes at most one frame; the caller must wait
    /// `sleep_duration` before calling `tick` again.
    pub fn tick(&mut self) -> FrameResult {
        self.sync_phase();

        if self.registers.is_disabled() {
            self.update_power(false);
            self.set_state(DispatchState::Disabled);
            return FrameResult {
                state: DispatchState::Disabled,
                frame: None,
                sleep_duration: self.config.idle_interval,
            };
        }
        self.update_power(true);

        let mode = self.registers.mode();
        let phase = self.config.timeline.phase(self.frame);
        let slot = match (mode.to_slot(), phase) {
            (Some(slot), _) => slot,
            (None, AutoPhase::Ripple) => EffectSlot::Ripple(RippleEffect),
            (None, AutoPhase::Fire) => EffectSlot::Fire(FireEffect),
            (None, AutoPhase::Done) => return self.finish_automatic(),
        };
        let state = DispatchState::from_mode(mode, phase);

        let frame = self.frame;
        self.sink.clear();
        slot.render(frame, self.registers, &mut self.sink);
        self.sink.flush();

        self.frame = self.frame.wrapping_add(1);
        self.set_state(state);

        FrameResult {
            state,
            frame: Some(frame),
            sleep_duration: slot.frame_interval(),
        }
    }

    /// Render forever, sleeping with `embassy-time` between iterations
    pub async fn run(mut self) -> ! {
        self.boot();
        loop {
            let result = self.tick();
            Timer::after(result.sleep_duration).await;
        }
    }

    /// Frame number the next rendering iteration will use
    pub fn frame_counter(&self) -> u32 {
        if self.registers.generation() == self.generation {
            self.frame
        } else {
            0
        }
    }

    /// State of the last iteration, `None` before the first one
    pub const fn state(&self) -> Option<DispatchState> {
        self.state
    }

    pub const fn config(&self) -> &DispatcherConfig {
        &self.config
    }

    pub const fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Restart the animation if the bus asked for it since the last iteration
    fn sync_phase(&mut self) {
        let generation = self.registers.generation();
        if generation != self.generation {
            self.generation = generation;
            self.frame = 0;
        }
    }

    /// The automatic timeline ran out: fall back to ripple and switch off
    fn finish_automatic(&mut self) -> FrameResult {
        #[cfg(feature = "esp32-log")]
        println!("[Dispatcher] automatic timeline done at frame {}", self.frame);

        self.registers.finish_automatic();
        self.frame = 0;
        self.update_power(false);
        self.set_state(DispatchState::Disabled);

        FrameResult {
            state: DispatchState::Disabled,
            frame: None,
            sleep_duration: Duration::from_millis(0),
        }
    }

    fn set_state(&mut self, state: DispatchState) {
        if self.state == Some(state) {
            return;
        }
        #[cfg(feature = "esp32-log")]
        println!("[Dispatcher] {:?} -> {:?}", self.state, state);
        self.state = Some(state);
    }

    fn update_power(&mut self, on: bool) {
        if self.powered == Some(on) {
            return;
        }
        self.sink.set_power(on);
        self.powered = Some(on);
    }
}
