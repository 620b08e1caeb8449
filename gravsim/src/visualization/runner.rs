//! Fixed-step driver
//!
//! Steps the physics exactly once per tick, then lets each consumer
//! cadence decide whether to sample the trace, redraw, or refit the
//! viewport. Rendering cost can never change how often physics runs.

use crate::error::SimResult;
use crate::simulation::cadence::Cadence;
use crate::simulation::scenario::Scenario;
use super::observer::Observer;
use super::trace::Trace;
use super::viewport::Bounds;

pub struct Runner {
    pub scenario: Scenario,
    view: Cadence, // redraw
    refit: Cadence, // viewport bounds
    sample: Cadence, // trace
    trace: Trace,
    ticks: u64,
}

impl Runner {
    pub fn new(scenario: Scenario) -> SimResult<Self> {
        let engine = &scenario.engine;
        let view = Cadence::new(engine.view_refresh)?;
        let refit = Cadence::new(engine.bounds_refit)?;
        let sample = Cadence::new(engine.trace_sample)?;
        let trace = Trace::new(engine.trace_length);
        Ok(Self {
            scenario,
            view,
            refit,
            sample,
            trace,
            ticks: 0,
        })
    }

    /// One physics step followed by the cadence-gated observer hooks
    pub fn tick<O: Observer + ?Sized>(&mut self, observer: &mut O) -> SimResult<()> {
        self.scenario.step()?;
        self.ticks += 1;

        if self.sample.tick() {
            self.trace.push(&self.scenario.trace_points());
            observer.on_trace(&self.trace);
        }

        if self.view.tick() {
            observer.on_redraw(self.ticks, &self.scenario.joints());
        }

        if self.refit.tick() {
            let joints = self.scenario.joints();
            let points = joints.iter().chain(self.trace.points());
            let engine = &self.scenario.engine;
            if let Some(bounds) = Bounds::fit(points, engine.zoom) {
                observer.on_refit(&bounds, engine.auto_fit);
            }
        }

        Ok(())
    }

    /// Run `steps` ticks, stopping at the first error
    pub fn run<O: Observer + ?Sized>(&mut self, steps: u64, observer: &mut O) -> SimResult<()> {
        for _ in 0..steps {
            self.tick(observer)?;
        }
        log::info!(
            "'{}': {} ticks, t = {:.3}",
            self.scenario.name,
            self.ticks,
            self.scenario.time()
        );
        Ok(())
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn trace(&self) -> &Trace {
        &self.trace
    }
}
