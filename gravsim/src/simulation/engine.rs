//! Runtime settings for the consumers of the physics tick
//!
//! Cadence periods for redraw, viewport refit and trace sampling, plus
//! trace and viewport options. None of these affect the physics itself.

#[derive(Debug, Clone, PartialEq)]
pub struct Engine {
    pub view_refresh: u32, // ticks between redraws
    pub bounds_refit: u32, // ticks between viewport refits
    pub trace_sample: u32, // ticks between trace samples
    pub trace_length: usize, // samples kept per traced point
    pub auto_fit: bool, // follow the refitted bounds
    pub zoom: f64, // bounds scale factor
}
