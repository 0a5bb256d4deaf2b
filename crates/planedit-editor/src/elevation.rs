//! Raising or lowering the selected furniture.

use tracing::{debug, warn};

use crate::commands::Command;
use crate::model::ObjectId;
use crate::plan::Plan;

#[derive(Debug, Clone, PartialEq)]
struct ElevationState {
    id: ObjectId,
    elevation: f32,
}

/// Offsets the elevation of every selected piece of furniture by the same
/// amount, always starting from the elevations found at capture time.
#[derive(Debug, Clone)]
pub struct ElevationCommand {
    states: Vec<ElevationState>,
    selection: Vec<ObjectId>,
    delta: f32,
}

impl ElevationCommand {
    pub fn capture(plan: &Plan) -> Self {
        let selection = plan.selected_items().to_vec();
        let states: Vec<ElevationState> = selection
            .iter()
            .filter_map(|&id| {
                plan.furniture(id).map(|furniture| ElevationState {
                    id,
                    elevation: furniture.elevation,
                })
            })
            .collect();
        debug!("Captured elevation of {} pieces of furniture", states.len());

        Self {
            states,
            selection,
            delta: 0.0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn delta(&self) -> f32 {
        self.delta
    }

    /// Sets every captured elevation to `captured + delta`.
    pub fn elevate(&mut self, plan: &mut Plan, delta: f32) {
        self.delta = delta;
        self.apply(plan, delta);
    }

    fn apply(&self, plan: &mut Plan, delta: f32) {
        for state in &self.states {
            match plan.furniture_mut(state.id) {
                Some(furniture) => furniture.elevation = state.elevation + delta,
                None => warn!("Skipping piece of furniture {}: no longer in the plan", state.id),
            }
        }
    }
}

impl Command for ElevationCommand {
    fn execute(&mut self, plan: &mut Plan) {
        self.apply(plan, self.delta);
        plan.set_selected_items(self.selection.clone());
    }

    fn undo(&mut self, plan: &mut Plan) {
        self.apply(plan, 0.0);
        plan.set_selected_items(self.selection.clone());
    }

    fn name(&self) -> &str {
        "Elevate"
    }
}
