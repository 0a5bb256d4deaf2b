use lyon::math::Transform;
use tracing::debug;

use super::options::TransformOptions;
use super::state::ObjectState;
use crate::commands::Command;
use crate::geometry::Bounds;
use crate::model::ObjectId;
use crate::plan::Plan;

/// Applies affine transforms to the objects selected at capture time.
///
/// Every call to [`TransformCommand::apply`] starts again from the captured
/// snapshots, so a dialog can re-apply as its inputs change without
/// accumulating error. Undo writes the snapshots back.
#[derive(Debug, Clone)]
pub struct TransformCommand {
    name: String,
    states: Vec<ObjectState>,
    items: Vec<ObjectId>,
    options: Option<TransformOptions>,
}

impl TransformCommand {
    /// Captures the state of every selected object in selection order.
    pub fn capture(name: impl Into<String>, plan: &Plan) -> Self {
        let states: Vec<ObjectState> = plan
            .selected_items()
            .iter()
            .filter_map(|&id| ObjectState::capture(plan, id))
            .collect();
        let items = states.iter().map(ObjectState::id).collect();
        let name = name.into();
        debug!("{}: captured {} objects", name, states.len());

        Self {
            name,
            states,
            items,
            options: None,
        }
    }

    pub fn states(&self) -> &[ObjectState] {
        &self.states
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Options of the last applied transform.
    pub fn options(&self) -> Option<&TransformOptions> {
        self.options.as_ref()
    }

    /// Applies `transform` to the captured geometry and reselects the
    /// captured objects.
    pub fn apply(
        &mut self,
        plan: &mut Plan,
        transform: Transform,
        rotate_text: bool,
        adjust_text: bool,
    ) {
        let options = TransformOptions::new(transform, rotate_text, adjust_text);
        self.options = Some(options);
        self.transform_all(plan, &options);
        self.reselect(plan);
    }

    /// Bounds of the live points of all captured objects, or zero bounds
    /// when there are none.
    pub fn bounds(&self, plan: &Plan) -> Bounds {
        Bounds::from_points(self.states.iter().flat_map(|state| state.points(plan)))
    }

    fn transform_all(&self, plan: &mut Plan, options: &TransformOptions) {
        for state in &self.states {
            state.transform(plan, options);
        }
    }

    fn reselect(&self, plan: &mut Plan) {
        plan.set_selected_items(self.items.clone());
    }

    /// Re-applies the last transform; does nothing if none was applied.
    pub fn redo(&mut self, plan: &mut Plan) {
        match self.options {
            Some(options) => {
                self.transform_all(plan, &options);
                self.reselect(plan);
            }
            None => debug!("{}: nothing to redo", self.name),
        }
    }
}

impl Command for TransformCommand {
    fn execute(&mut self, plan: &mut Plan) {
        self.redo(plan);
    }

    fn undo(&mut self, plan: &mut Plan) {
        for state in &self.states {
            state.reset(plan);
        }
        self.reselect(plan);
    }

    fn name(&self) -> &str {
        &self.name
    }
}
