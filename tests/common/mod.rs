//! Shared test doubles for the controller tests.

#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use stepper_pulse::{Hertz, MonotonicClock, PulseGenerator};

/// One command seen by [`RecordingPulses`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PulseCall {
    Init,
    Configure(u32),
    Start,
    Stop,
}

/// Pulse generator that logs every call and can be told to fail.
///
/// Clones share the same log and failure switches, so a test can keep a
/// handle after moving one into the controller.
#[derive(Debug, Clone, Default)]
pub struct RecordingPulses {
    calls: Rc<RefCell<Vec<PulseCall>>>,
    fail_init: Rc<Cell<bool>>,
    fail_commands: Rc<Cell<bool>>,
}

impl RecordingPulses {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_init() -> Self {
        let pulses = Self::default();
        pulses.fail_init.set(true);
        pulses
    }

    pub fn set_failing(&self, failing: bool) {
        self.fail_commands.set(failing);
    }

    pub fn calls(&self) -> Vec<PulseCall> {
        self.calls.borrow().clone()
    }

    pub fn clear(&self) {
        self.calls.borrow_mut().clear();
    }

    pub fn configured(&self) -> Vec<u32> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|call| match call {
                PulseCall::Configure(hz) => Some(*hz),
                _ => None,
            })
            .collect()
    }

    fn record(&self, call: PulseCall) -> Result<(), &'static str> {
        self.calls.borrow_mut().push(call);
        if self.fail_commands.get() {
            Err("pulse generator fault")
        } else {
            Ok(())
        }
    }
}

impl PulseGenerator for RecordingPulses {
    type Error = &'static str;

    fn init(&mut self) -> Result<(), Self::Error> {
        self.calls.borrow_mut().push(PulseCall::Init);
        if self.fail_init.get() {
            Err("no free state machine")
        } else {
            Ok(())
        }
    }

    fn configure(&mut self, frequency: Hertz) -> Result<(), Self::Error> {
        self.record(PulseCall::Configure(frequency.value()))
    }

    fn start(&mut self) -> Result<(), Self::Error> {
        self.record(PulseCall::Start)
    }

    fn stop(&mut self) -> Result<(), Self::Error> {
        self.record(PulseCall::Stop)
    }
}

/// Manually advanced microsecond clock.
#[derive(Debug, Clone, Default)]
pub struct SimClock(Rc<Cell<u64>>);

impl SimClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&self, us: u64) {
        self.0.set(self.0.get() + us);
    }

    pub fn set(&self, us: u64) {
        self.0.set(us);
    }
}

impl MonotonicClock for SimClock {
    fn now_us(&self) -> u64 {
        self.0.get()
    }
}
