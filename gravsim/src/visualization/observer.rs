//! Hooks the runner calls when one of its cadences fires

use crate::simulation::states::NPoint2;
use super::trace::Trace;
use super::viewport::Bounds;

/// Receiver of cadence-gated updates, every hook defaults to a no-op
pub trait Observer {
    /// Redraw with the current render points
    fn on_redraw(&mut self, _tick: u64, _points: &[NPoint2]) {}

    /// Viewport bounds were refitted; `follow` asks the view to zoom onto them
    fn on_refit(&mut self, _bounds: &Bounds, _follow: bool) {}

    /// A new trace sample was appended
    fn on_trace(&mut self, _trace: &Trace) {}
}

/// Observer that ignores everything
pub struct NullObserver;

impl Observer for NullObserver {}

/// Observer that reports through the `log` facade and keeps simple counters
#[derive(Debug, Default)]
pub struct LogObserver {
    pub redraws: u64,
    pub refits: u64,
    pub samples: u64,
    pub last_bounds: Option<Bounds>,
}

impl Observer for LogObserver {
    fn on_redraw(&mut self, tick: u64, points: &[NPoint2]) {
        self.redraws += 1;
        log::debug!("tick {tick}: redraw {} points", points.len());
    }

    fn on_refit(&mut self, bounds: &Bounds, follow: bool) {
        self.refits += 1;
        self.last_bounds = Some(*bounds);
        log::debug!(
            "refit: center = ({:.2}, {:.2}), side = {:.2}, follow = {}",
            bounds.center().x,
            bounds.center().y,
            bounds.width(),
            follow
        );
    }

    fn on_trace(&mut self, trace: &Trace) {
        self.samples += 1;
        log::trace!("trace sample: {} tracks", trace.tracks().len());
    }
}
