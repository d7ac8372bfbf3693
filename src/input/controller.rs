//! Press/release timing controller.
//!
//! Converts raw press and release events for logical keys into per-frame
//! `Controls` snapshots with initial-delay-then-repeat semantics: movement
//! keys fire once immediately on press, wait out an initial delay, then
//! repeat at a fixed rate (faster for soft drop). Rotate, hard drop, and
//! restart are one-shot booleans the consumer clears after each frame;
//! pause is a toggle that persists.
//!
//! The controller is source-agnostic: keyboards and tap/touch sources feed
//! the same state machine. Sources without reliable release events can
//! construct it with `clear_movement_on_release` so releases drop movement
//! instantly instead of waiting for the next frame's reset.

use crate::types::{
    Controls, InputKey, DOWN_REPEAT_RATE_MS, INITIAL_DELAY_MS, REPEAT_RATE_MS,
};

/// Repeat timing configuration, overridable at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputTiming {
    /// Delay between the immediate press fire and the first repeat.
    pub initial_delay_ms: u32,
    /// Repeat interval for left/right movement.
    pub repeat_ms: u32,
    /// Repeat interval for soft drop.
    pub down_repeat_ms: u32,
}

impl Default for InputTiming {
    fn default() -> Self {
        Self {
            initial_delay_ms: INITIAL_DELAY_MS,
            repeat_ms: REPEAT_RATE_MS,
            down_repeat_ms: DOWN_REPEAT_RATE_MS,
        }
    }
}

/// Per-key press tracking.
#[derive(Debug, Clone, Copy, Default)]
struct KeyState {
    held: bool,
    /// Milliseconds accumulated since the last fire.
    since_fire_ms: u32,
    /// True between the immediate press fire and the first repeat.
    initial_window: bool,
    /// True once the key has fired at least once during this hold.
    fired: bool,
}

/// The input timing state machine.
#[derive(Debug, Clone)]
pub struct InputController {
    controls: Controls,
    keys: [KeyState; InputKey::ALL.len()],
    timing: InputTiming,
    clear_movement_on_release: bool,
}

impl InputController {
    pub fn new() -> Self {
        Self::with_timing(InputTiming::default())
    }

    pub fn with_timing(timing: InputTiming) -> Self {
        Self {
            controls: Controls::default(),
            keys: [KeyState::default(); InputKey::ALL.len()],
            timing,
            clear_movement_on_release: false,
        }
    }

    /// Sources without trustworthy release timing (touch buttons) should set
    /// this so a release zeroes the movement controls immediately.
    pub fn clear_movement_on_release(mut self, clear: bool) -> Self {
        self.clear_movement_on_release = clear;
        self
    }

    /// Adjust the movement repeat feel at runtime.
    pub fn set_movement_timing(&mut self, initial_delay_ms: u32, repeat_ms: u32) {
        self.timing.initial_delay_ms = initial_delay_ms;
        self.timing.repeat_ms = repeat_ms;
    }

    pub fn timing(&self) -> InputTiming {
        self.timing
    }

    /// Handle a press-start event. Re-presses while the key is already held
    /// are ignored; terminal and OS auto-repeat must not reach the timing
    /// state machine.
    pub fn press(&mut self, key: InputKey) {
        let slot = key as usize;
        if self.keys[slot].held {
            return;
        }
        self.keys[slot].held = true;
        self.keys[slot].initial_window = true;
        self.keys[slot].since_fire_ms = 0;

        if key.is_repeatable() {
            self.fire_movement(key);
            self.keys[slot].fired = true;
        } else {
            match key {
                InputKey::Up => self.controls.up = true,
                InputKey::Space => self.controls.space = true,
                InputKey::Restart => self.controls.restart = true,
                InputKey::Pause => self.controls.pause = !self.controls.pause,
                InputKey::Left | InputKey::Right | InputKey::Down => {}
            }
        }
    }

    /// Handle a release event. Held/timing state for the key is dropped.
    /// Level-sensed one-shots (up, space, restart) clear with the key;
    /// movement controls are left for the per-frame reset unless this
    /// controller was configured to clear them on release. The pause toggle
    /// is never touched by a release.
    pub fn release(&mut self, key: InputKey) {
        self.keys[key as usize] = KeyState::default();

        match key {
            InputKey::Up => self.controls.up = false,
            InputKey::Space => self.controls.space = false,
            InputKey::Restart => self.controls.restart = false,
            InputKey::Pause => {}
            InputKey::Left | InputKey::Right | InputKey::Down => {
                if self.clear_movement_on_release {
                    self.controls.left = false;
                    self.controls.right = false;
                    self.controls.down = false;
                }
            }
        }
    }

    /// Advance the per-key timers by the frame's elapsed time, re-firing any
    /// held movement key whose delay or repeat interval has passed. At most
    /// one fire per key per call.
    pub fn advance(&mut self, elapsed_ms: u32) {
        for key in InputKey::ALL {
            if !key.is_repeatable() {
                continue;
            }
            let slot = key as usize;
            if !self.keys[slot].held || !self.keys[slot].fired {
                continue;
            }

            self.keys[slot].since_fire_ms =
                self.keys[slot].since_fire_ms.saturating_add(elapsed_ms);

            let threshold = if self.keys[slot].initial_window {
                self.timing.initial_delay_ms
            } else if key == InputKey::Down {
                self.timing.down_repeat_ms
            } else {
                self.timing.repeat_ms
            };

            if self.keys[slot].since_fire_ms > threshold {
                self.keys[slot].initial_window = false;
                self.keys[slot].since_fire_ms = 0;
                self.fire_movement(key);
            }
        }
    }

    /// Current control state as an immutable copy.
    pub fn controls(&self) -> Controls {
        self.controls
    }

    /// Clear everything the engine consumes once per frame: one-shots (up,
    /// space, restart) and the movement booleans, which are re-asserted by
    /// the next fire. The pause toggle survives. The engine must call this
    /// after processing input each frame or one-shot actions would repeat
    /// every frame without a new press.
    pub fn reset_one_time_controls(&mut self) {
        self.controls.up = false;
        self.controls.space = false;
        self.controls.restart = false;
        self.controls.left = false;
        self.controls.right = false;
        self.controls.down = false;
    }

    /// Movement fires are mutually exclusive: all three are dropped, then
    /// exactly one is set.
    fn fire_movement(&mut self, key: InputKey) {
        self.controls.left = false;
        self.controls.right = false;
        self.controls.down = false;
        match key {
            InputKey::Left => self.controls.left = true,
            InputKey::Right => self.controls.right = true,
            InputKey::Down => self.controls.down = true,
            _ => {}
        }
    }
}

impl Default for InputController {
    fn default() -> Self {
        Self::new()
    }
}
