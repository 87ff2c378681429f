use nalgebra::Point2;
use std::{collections::VecDeque, iter::FromIterator};

/// The points the AI drives through, in order. Points are consumed from the
/// front as they are reached and never come back.
#[derive(Clone, Debug, Default)]
pub struct WaypointRoute {
    waypoints: VecDeque<Point2<f32>>,
    visited: usize,
}

impl WaypointRoute {
    pub fn new(waypoints: impl IntoIterator<Item = Point2<f32>>) -> Self {
        Self {
            waypoints: waypoints.into_iter().collect(),
            visited: 0,
        }
    }

    /// The waypoint currently being driven towards.
    pub fn head(&self) -> Option<Point2<f32>> {
        self.waypoints.front().cloned()
    }

    /// Marks the head as reached.
    pub fn pop(&mut self) -> Option<Point2<f32>> {
        let popped = self.waypoints.pop_front();
        if popped.is_some() {
            self.visited += 1;
        }
        popped
    }

    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    /// How many waypoints are still ahead.
    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    /// How many waypoints have been popped so far.
    pub fn visited(&self) -> usize {
        self.visited
    }
}

impl FromIterator<Point2<f32>> for WaypointRoute {
    fn from_iter<I: IntoIterator<Item = Point2<f32>>>(iter: I) -> Self {
        Self::new(iter)
    }
}
