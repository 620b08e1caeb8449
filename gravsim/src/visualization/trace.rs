//! Bounded history of sampled positions, one track per traced point
//!
//! Once a track holds `max_len` samples the oldest one is dropped for
//! every new sample.

use std::collections::VecDeque;

use crate::simulation::states::NPoint2;

#[derive(Debug, Clone, Default)]
pub struct Trace {
    tracks: Vec<VecDeque<NPoint2>>,
    max_len: usize,
}

impl Trace {
    pub fn new(max_len: usize) -> Self {
        Self {
            tracks: Vec::new(),
            max_len,
        }
    }

    /// Append one sample per point; `points[i]` goes to track `i`
    pub fn push(&mut self, points: &[NPoint2]) {
        if self.tracks.len() < points.len() {
            self.tracks.resize_with(points.len(), VecDeque::new);
        }
        for (track, p) in self.tracks.iter_mut().zip(points) {
            track.push_back(*p);
            while track.len() > self.max_len {
                track.pop_front();
            }
        }
    }

    pub fn tracks(&self) -> &[VecDeque<NPoint2>] {
        &self.tracks
    }

    pub fn max_len(&self) -> usize {
        self.max_len
    }

    /// Every stored sample across all tracks
    pub fn points(&self) -> impl Iterator<Item = &NPoint2> {
        self.tracks.iter().flatten()
    }
}
