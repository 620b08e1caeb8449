//! Square viewport bounds fitted around a set of points

use serde::Serialize;

use crate::simulation::states::NPoint2;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Bounds {
    pub min: NPoint2,
    pub max: NPoint2,
}

impl Bounds {
    /// Axis-aligned box around `points`, or `None` when there are none
    pub fn enclosing<'a, I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a NPoint2>,
    {
        let mut iter = points.into_iter();
        let first = *iter.next()?;
        let (min, max) = iter.fold((first, first), |(lo, hi), p| {
            (
                NPoint2::new(lo.x.min(p.x), lo.y.min(p.y)),
                NPoint2::new(hi.x.max(p.x), hi.y.max(p.y)),
            )
        });
        Some(Self { min, max })
    }

    /// Square around the centre of the enclosing box, half-side `max(width, height) * zoom`
    pub fn fit<'a, I>(points: I, zoom: f64) -> Option<Self>
    where
        I: IntoIterator<Item = &'a NPoint2>,
    {
        let rect = Self::enclosing(points)?;
        let c = rect.center();
        let dim = rect.width().max(rect.height()) * zoom;
        Some(Self {
            min: NPoint2::new(c.x - dim, c.y - dim),
            max: NPoint2::new(c.x + dim, c.y + dim),
        })
    }

    pub fn center(&self) -> NPoint2 {
        nalgebra::center(&self.min, &self.max)
    }

    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }
}
