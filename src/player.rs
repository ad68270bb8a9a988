//! Playback State Machine
//!
//! Every animated visualizer drives its precomputed step list through
//! this player: one repeating interval, advanced one step per tick.
//! Start, reset, and speed changes all cancel any live interval first,
//! so at most one interval exists per screen. Pausing cancels the
//! interval but keeps the tick closure, so resume picks up where the
//! animation stopped. The handle and the closure live in local
//! `StoredValue`s because neither is `Send`.

use std::time::Duration;

use leptos::leptos_dom::helpers::{set_interval_with_handle, IntervalHandle};
use leptos::prelude::*;

/// Speed presets in milliseconds per tick, with their button labels.
pub const SPEED_PRESETS: &[(u32, &str)] = &[
    (250, "Fast"),
    (500, "Medium"),
    (1000, "Slow"),
    (2000, "Very Slow"),
];

pub const DEFAULT_SPEED_MS: u32 = 1000;

type TickFn = Box<dyn FnMut() -> bool>;

#[derive(Clone, Copy)]
pub struct Player {
    playing: RwSignal<bool>,
    paused: RwSignal<bool>,
    speed: RwSignal<u32>,
    handle: StoredValue<Option<IntervalHandle>, LocalStorage>,
    tick: StoredValue<Option<TickFn>, LocalStorage>,
}

impl Player {
    pub fn new() -> Self {
        Self {
            playing: RwSignal::new(false),
            paused: RwSignal::new(false),
            speed: RwSignal::new(DEFAULT_SPEED_MS),
            handle: StoredValue::new_local(None),
            tick: StoredValue::new_local(None),
        }
    }

    /// Reactive playing flag, for disabling inputs mid-animation. Stays
    /// true while paused; only stop/completion clears it.
    pub fn is_playing(&self) -> bool {
        self.playing.get()
    }

    pub fn is_paused(&self) -> bool {
        self.paused.get()
    }

    pub fn speed(&self) -> u32 {
        self.speed.get()
    }

    /// Begin ticking `tick` every `speed` ms. A `false` return from
    /// `tick` ends playback. Any previous interval is cancelled.
    pub fn start(&self, tick: impl FnMut() -> bool + 'static) {
        self.cancel();
        self.tick.set_value(Some(Box::new(tick)));
        self.playing.set(true);
        self.paused.set(false);
        self.spawn();
    }

    /// Cancel the interval and leave playback stopped.
    pub fn stop(&self) {
        self.cancel();
        self.tick.set_value(None);
        self.playing.set(false);
        self.paused.set(false);
    }

    /// Halt ticking without discarding the run.
    pub fn pause(&self) {
        if self.playing.get_untracked() && !self.paused.get_untracked() {
            self.cancel();
            self.paused.set(true);
        }
    }

    /// Continue a paused run at the current speed.
    pub fn resume(&self) {
        if self.playing.get_untracked() && self.paused.get_untracked() {
            self.paused.set(false);
            self.spawn();
        }
    }

    pub fn toggle_pause(&self) {
        if self.paused.get_untracked() {
            self.resume();
        } else {
            self.pause();
        }
    }

    /// Change speed. A change mid-run restarts the animation at the new
    /// speed via `restart`.
    pub fn set_speed(&self, ms: u32, restart: impl FnOnce() + 'static) {
        self.speed.set(ms);
        if self.playing.get_untracked() && !self.paused.get_untracked() {
            self.stop();
            // Brief gap so the restart reads as a restart.
            gloo_timers::callback::Timeout::new(100, restart).forget();
        }
    }

    fn spawn(&self) {
        let playing = self.playing;
        let paused = self.paused;
        let slot = self.handle;
        let tick = self.tick;
        let period = Duration::from_millis(self.speed.get_untracked() as u64);
        let started = set_interval_with_handle(
            move || {
                let keep_going = tick
                    .try_update_value(|t| t.as_mut().map(|f| f()).unwrap_or(false))
                    .unwrap_or(false);
                if !keep_going {
                    // Clearing from inside the callback stops future
                    // ticks; the slot is emptied so start/stop do not
                    // re-clear a dead handle.
                    slot.update_value(|h| {
                        if let Some(h) = h.take() {
                            h.clear();
                        }
                    });
                    tick.set_value(None);
                    playing.set(false);
                    paused.set(false);
                }
            },
            period,
        );
        match started {
            Ok(handle) => self.handle.set_value(Some(handle)),
            Err(e) => {
                web_sys::console::error_1(&format!("[Player] setInterval failed: {e:?}").into());
                self.playing.set(false);
                self.paused.set(false);
            }
        }
    }

    fn cancel(&self) {
        self.handle.update_value(|h| {
            if let Some(h) = h.take() {
                h.clear();
            }
        });
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}
