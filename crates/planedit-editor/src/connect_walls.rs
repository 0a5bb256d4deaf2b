//! Joining a chain of selected walls end to start.

use tracing::{debug, warn};

use crate::commands::Command;
use crate::geometry::PlanPoint;
use crate::model::{ObjectId, PlanObject};
use crate::plan::Plan;

#[derive(Debug, Clone, PartialEq)]
struct WallLinkState {
    id: ObjectId,
    end: PlanPoint,
    wall_at_start: Option<ObjectId>,
    wall_at_end: Option<ObjectId>,
}

/// Connects each selected wall's end to the start of the next selected wall.
#[derive(Debug, Clone)]
pub struct ConnectWallsCommand {
    states: Vec<WallLinkState>,
}

impl ConnectWallsCommand {
    /// True if at least two walls are selected.
    pub fn is_applicable(plan: &Plan) -> bool {
        plan.selected_items()
            .iter()
            .filter(|&&id| matches!(plan.get(id), Some(PlanObject::Wall(_))))
            .nth(1)
            .is_some()
    }

    pub fn capture(plan: &Plan) -> Self {
        let states = plan
            .selected_items()
            .iter()
            .filter_map(|&id| {
                plan.wall(id).map(|wall| WallLinkState {
                    id,
                    end: wall.end(),
                    wall_at_start: wall.wall_at_start,
                    wall_at_end: wall.wall_at_end,
                })
            })
            .collect();
        Self { states }
    }

    pub fn wall_count(&self) -> usize {
        self.states.len()
    }
}

impl Command for ConnectWallsCommand {
    fn execute(&mut self, plan: &mut Plan) {
        for pair in self.states.windows(2) {
            let (first, second) = (pair[0].id, pair[1].id);
            let Some(start) = plan.wall(second).map(|wall| wall.start()) else {
                warn!("Cannot connect wall {}: wall {} is gone", first, second);
                continue;
            };
            let Some(wall) = plan.wall_mut(first) else {
                warn!("Cannot connect wall {}: no longer in the plan", first);
                continue;
            };
            [wall.x_end, wall.y_end] = start;
            wall.wall_at_end = Some(second);
            if let Some(wall) = plan.wall_mut(second) {
                wall.wall_at_start = Some(first);
            }
        }
        debug!("Connected {} walls", self.states.len());
    }

    fn undo(&mut self, plan: &mut Plan) {
        for state in &self.states {
            match plan.wall_mut(state.id) {
                Some(wall) => {
                    wall.wall_at_start = state.wall_at_start;
                    wall.wall_at_end = state.wall_at_end;
                    [wall.x_end, wall.y_end] = state.end;
                }
                None => warn!("Skipping wall {}: no longer in the plan", state.id),
            }
        }
    }

    fn name(&self) -> &str {
        "Connect walls"
    }
}
