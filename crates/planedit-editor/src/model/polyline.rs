use super::PlanItem;
use crate::geometry::{BoundsPoints, PlanPoint};

/// An open or closed line drawn through a sequence of points.
#[derive(Debug, Clone, PartialEq)]
pub struct Polyline {
    points: Vec<PlanPoint>,
    pub closed_path: bool,
    pub thickness: f32,
    pub color: u32,
}

impl Polyline {
    pub fn new(points: Vec<PlanPoint>) -> Self {
        Self {
            points,
            closed_path: false,
            thickness: 1.0,
            color: 0xFF00_0000,
        }
    }

    pub fn closed(mut self, closed: bool) -> Self {
        self.closed_path = closed;
        self
    }

    pub fn points(&self) -> &[PlanPoint] {
        &self.points
    }

    pub fn set_points(&mut self, points: &[PlanPoint]) {
        self.points = points.to_vec();
    }

    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    /// Inserts a point before `index`; an index past the end appends.
    pub fn add_point(&mut self, index: usize, x: f32, y: f32) {
        let index = index.min(self.points.len());
        self.points.insert(index, [x, y]);
    }

    pub fn remove_point(&mut self, index: usize) {
        if index < self.points.len() {
            self.points.remove(index);
        }
    }
}

impl PlanItem for Polyline {
    fn bounds_points(&self) -> BoundsPoints {
        self.points.iter().copied().collect()
    }
}
