use planedit_editor::builders::translation;
use planedit_editor::{Bounds, Command, Label, Plan, Room, TransformCommand, Wall};

fn sample_plan() -> (Plan, u64, u64, u64) {
    let mut plan = Plan::new();
    let wall = plan.add(Wall::new(0.0, 0.0, 300.0, 0.0, 10.0));
    let room = plan.add(Room::square(200.0));
    let label = plan.add(Label::new("entrance", -50.0, 250.0));
    (plan, wall, room, label)
}

#[test]
fn test_capture_follows_selection_order() {
    let (mut plan, wall, room, label) = sample_plan();
    plan.set_selected_items(vec![label, wall, room]);
    let command = TransformCommand::capture("Move", &plan);

    let ids: Vec<u64> = command.states().iter().map(|s| s.id()).collect();
    assert_eq!(ids, vec![label, wall, room]);
    assert_eq!(command.name(), "Move");
    assert!(command.options().is_none());
}

#[test]
fn test_bounds_of_captured_objects() {
    let (mut plan, wall, room, label) = sample_plan();
    plan.set_selected_items(vec![wall, room, label]);
    let mut command = TransformCommand::capture("Move", &plan);
    assert_eq!(command.bounds(&plan), Bounds::new(-50.0, 0.0, 300.0, 250.0));

    command.apply(&mut plan, translation(10.0, 10.0), true, true);
    assert_eq!(command.bounds(&plan), Bounds::new(-40.0, 10.0, 310.0, 260.0));
}

#[test]
fn test_empty_selection() {
    let (mut plan, ..) = sample_plan();
    let mut command = TransformCommand::capture("Move", &plan);
    assert!(command.is_empty());
    assert!(command.bounds(&plan).is_zero());
    command.apply(&mut plan, translation(10.0, 10.0), true, true);
    command.undo(&mut plan);
}

#[test]
fn test_apply_reselects_captured_objects() {
    let (mut plan, wall, room, _) = sample_plan();
    plan.set_selected_items(vec![room, wall]);
    let mut command = TransformCommand::capture("Move", &plan);

    plan.deselect_all();
    command.apply(&mut plan, translation(1.0, 0.0), true, true);
    assert_eq!(plan.selected_items(), &[room, wall]);

    plan.deselect_all();
    command.undo(&mut plan);
    assert_eq!(plan.selected_items(), &[room, wall]);
}

#[test]
fn test_reapply_starts_from_snapshot() {
    let (mut plan, wall, _, _) = sample_plan();
    plan.set_selected_items(vec![wall]);
    let mut command = TransformCommand::capture("Move", &plan);

    command.apply(&mut plan, translation(10.0, 0.0), true, true);
    command.apply(&mut plan, translation(25.0, 0.0), true, true);
    assert_eq!(plan.wall(wall).unwrap().start(), [25.0, 0.0]);
}

#[test]
fn test_undo_redo_cycle() {
    let (mut plan, wall, room, _) = sample_plan();
    plan.set_selected_items(vec![wall, room]);
    let original = plan.clone();
    let mut command = TransformCommand::capture("Move", &plan);

    // redo before any apply does nothing
    command.execute(&mut plan);
    assert_eq!(plan, original);

    command.apply(&mut plan, translation(0.0, -30.0), true, true);
    let moved = plan.clone();

    command.undo(&mut plan);
    assert_eq!(plan, original);
    command.execute(&mut plan);
    assert_eq!(plan, moved);
}

#[test]
fn test_deleted_object_is_skipped() {
    let (mut plan, wall, room, _) = sample_plan();
    plan.set_selected_items(vec![wall, room]);
    let mut command = TransformCommand::capture("Move", &plan);

    plan.remove(wall);
    command.apply(&mut plan, translation(5.0, 5.0), true, true);
    assert_eq!(plan.room(room).unwrap().points()[0], [5.0, 5.0]);
    assert_eq!(plan.selected_items(), &[room]);

    command.undo(&mut plan);
    assert_eq!(plan.room(room).unwrap().points()[0], [0.0, 0.0]);
}
