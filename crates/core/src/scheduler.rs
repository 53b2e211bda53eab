//! Cooperative tick scheduler.
//!
//! A [`Routine`] is a resumable state machine. Each tick the scheduler resumes
//! every live routine once, in the order they were added; a routine answers
//! with [`Flow::Suspend`] (resume me again in N ticks) or [`Flow::Done`]
//! (drop me). After the pass the surface is refreshed once and the scheduler
//! sleeps for one fixed tick.
//!
//! Routines spawned during a pass are parked in a pending list and join the
//! live set at the start of the next tick, so a routine never runs in the tick
//! that created it and the live set is never grown while it is iterated.

use std::thread;
use std::time::Duration;

use anyhow::Result;

use crate::surface::{InputPoll, Surface};
use crate::world::World;

/// What a routine wants after being resumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Resume again after this many ticks. Zero is treated as one.
    Suspend(u32),
    /// Finished; the scheduler drops the routine.
    Done,
}

pub trait Routine {
    /// Run until the next suspension point.
    fn resume(&mut self, ctx: &mut Context<'_>) -> Flow;

    /// Short name used in logs.
    fn name(&self) -> &'static str;
}

/// Everything a routine may touch while it runs.
pub struct Context<'a> {
    pub surface: &'a mut dyn Surface,
    pub input: &'a mut dyn InputPoll,
    pub world: &'a mut World,
    spawned: &'a mut Vec<Box<dyn Routine>>,
}

impl<'a> Context<'a> {
    pub fn new(
        surface: &'a mut dyn Surface,
        input: &'a mut dyn InputPoll,
        world: &'a mut World,
        spawned: &'a mut Vec<Box<dyn Routine>>,
    ) -> Self {
        Self {
            surface,
            input,
            world,
            spawned,
        }
    }

    /// Start a new routine. It first runs on the next tick.
    pub fn spawn(&mut self, routine: impl Routine + 'static) {
        self.spawned.push(Box::new(routine));
    }
}

struct Slot {
    routine: Box<dyn Routine>,
    wait: u32,
}

pub struct Scheduler {
    live: Vec<Slot>,
    pending: Vec<Box<dyn Routine>>,
    tick_duration: Duration,
    ticks: u64,
}

impl Scheduler {
    pub fn new(tick_duration: Duration) -> Self {
        Self {
            live: Vec::new(),
            pending: Vec::new(),
            tick_duration,
            ticks: 0,
        }
    }

    /// Add a routine; it first runs on the next tick.
    pub fn spawn(&mut self, routine: impl Routine + 'static) {
        self.pending.push(Box::new(routine));
    }

    /// Routines that are live or waiting to join.
    pub fn len(&self) -> usize {
        self.live.len() + self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Ticks completed so far.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Names of the routines, live ones first, in resume order.
    pub fn names(&self) -> Vec<&'static str> {
        self.live
            .iter()
            .map(|s| s.routine.name())
            .chain(self.pending.iter().map(|r| r.name()))
            .collect()
    }

    /// One pass over the live set followed by one refresh. Does not sleep.
    pub fn step(
        &mut self,
        surface: &mut dyn Surface,
        input: &mut dyn InputPoll,
        world: &mut World,
    ) -> Result<()> {
        self.live.extend(
            self.pending
                .drain(..)
                .map(|routine| Slot { routine, wait: 0 }),
        );

        let mut ctx = Context::new(&mut *surface, input, world, &mut self.pending);
        self.live.retain_mut(|slot| {
            if slot.wait > 1 {
                slot.wait -= 1;
                return true;
            }
            match slot.routine.resume(&mut ctx) {
                Flow::Suspend(ticks) => {
                    slot.wait = ticks.max(1);
                    true
                }
                Flow::Done => {
                    log::trace!("{} finished", slot.routine.name());
                    false
                }
            }
        });

        self.ticks += 1;
        surface.refresh()
    }

    /// [`Scheduler::step`] followed by the fixed tick delay.
    pub fn tick(
        &mut self,
        surface: &mut dyn Surface,
        input: &mut dyn InputPoll,
        world: &mut World,
    ) -> Result<()> {
        self.step(surface, input, world)?;
        thread::sleep(self.tick_duration);
        Ok(())
    }

    /// Tick until `stop` says so. An empty live set does not stop the loop.
    pub fn run_until(
        &mut self,
        surface: &mut dyn Surface,
        input: &mut dyn InputPoll,
        world: &mut World,
        mut stop: impl FnMut(&mut dyn InputPoll) -> bool,
    ) -> Result<()> {
        loop {
            self.tick(surface, input, world)?;
            if stop(&mut *input) {
                log::info!("stopped after {} ticks", self.ticks);
                return Ok(());
            }
        }
    }
}
