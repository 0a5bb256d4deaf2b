use crate::plan::Plan;

/// A reversible edit of a [`Plan`].
///
/// The engine only produces commands; keeping them on an undo stack is up
/// to the caller. `execute` is also used as redo.
pub trait Command {
    /// Executes (or re-executes) the command.
    fn execute(&mut self, plan: &mut Plan);

    /// Undoes the command.
    fn undo(&mut self, plan: &mut Plan);

    /// Returns the name of the command for display.
    fn name(&self) -> &str;
}
