use std::cell::Cell;
use std::rc::Rc;

use planedit_core::{shared, EditError, LengthUnit};
use planedit_editor::{
    Command, Label, NewRoomCommand, Plan, PlanPoints, PointsContainer, PointsEdit, PointsModel,
    Room,
};

#[test]
fn test_editing_through_shared_plan() {
    let plan = shared(Plan::new());
    let room = plan.borrow_mut().add(Room::square(100.0));
    plan.borrow_mut().select(room);

    let container = PlanPoints::for_selection(plan.clone()).unwrap();
    assert_eq!(container.id(), room);
    let mut edit = PointsEdit::open(&plan.borrow(), room).unwrap();
    let mut model = PointsModel::with_target(container, LengthUnit::Centimeter);
    assert!(!edit.has_changes(&plan.borrow()));

    model.set_point(2, 150.0, 120.0).unwrap();
    assert_eq!(plan.borrow().room(room).unwrap().points()[2], [150.0, 120.0]);
    assert!(edit.has_changes(&plan.borrow()));
    assert_eq!(model.element_label(2).unwrap(), "150.0; 120.0");

    model.set_unit(LengthUnit::Inch);
    assert_eq!(model.element_label(2).unwrap(), "59.055; 47.244");

    edit.undo(&mut plan.borrow_mut());
    assert_eq!(
        plan.borrow().room(room).unwrap().points(),
        Room::square(100.0).points()
    );
    edit.execute(&mut plan.borrow_mut());
    assert_eq!(plan.borrow().room(room).unwrap().points()[2], [150.0, 120.0]);
}

#[test]
fn test_add_point_reaches_plan() {
    let plan = shared(Plan::new());
    let room = plan.borrow_mut().add(Room::square(100.0));
    let container = PlanPoints::new(plan.clone(), room).unwrap();
    let mut model = PointsModel::with_target(container, LengthUnit::Centimeter);

    model.add_point(4, 50.0, 150.0).unwrap();
    assert_eq!(plan.borrow().room(room).unwrap().point_count(), 5);
    model.remove_point(0).unwrap();
    assert_eq!(plan.borrow().room(room).unwrap().points()[0], [100.0, 0.0]);
    assert_eq!(model.len(), 4);
}

#[test]
fn test_container_rejects_other_kinds() {
    let plan = shared(Plan::new());
    let label = plan.borrow_mut().add(Label::new("hall", 0.0, 0.0));

    assert!(matches!(
        PlanPoints::new(plan.clone(), label),
        Err(EditError::WrongKind { .. })
    ));
    assert!(matches!(
        PlanPoints::new(plan.clone(), 99),
        Err(EditError::ObjectNotFound { id: 99 })
    ));
    plan.borrow_mut().select(label);
    assert!(matches!(
        PlanPoints::for_selection(plan.clone()),
        Err(EditError::NothingToEdit { .. })
    ));
    assert!(PointsEdit::open(&plan.borrow(), label).is_err());
}

#[test]
fn test_container_outlives_object() {
    let plan = shared(Plan::new());
    let room = plan.borrow_mut().add(Room::square(100.0));
    let container = PlanPoints::new(plan.clone(), room).unwrap();
    plan.borrow_mut().remove(room);

    assert!(container.points().is_empty());
    assert!(container.is_closed());
    assert!(container.is_filled());
}

#[test]
fn test_new_room_undo_redo() {
    let mut plan = Plan::new();
    let label = plan.add(Label::new("hall", 0.0, 0.0));
    plan.select(label);

    let side = NewRoomCommand::default_side(LengthUnit::Centimeter);
    assert_eq!(side, 500.0);
    let mut command = NewRoomCommand::new(side).unwrap();
    command.execute(&mut plan);

    let room = command.room().unwrap();
    assert_eq!(plan.selected_items(), &[room]);
    assert_eq!(plan.room(room).unwrap().points(), Room::square(500.0).points());

    command.undo(&mut plan);
    assert!(!plan.contains(room));
    assert_eq!(plan.selected_items(), &[label]);

    command.execute(&mut plan);
    assert_eq!(command.room(), Some(room));
    assert!(plan.contains(room));
    assert_eq!(command.name(), "New room");
}

#[test]
fn test_new_room_side_validation() {
    assert!(NewRoomCommand::new(0.0).is_err());
    assert!(NewRoomCommand::new(f32::NAN).is_err());
    let inch_side = NewRoomCommand::default_side(LengthUnit::Inch);
    assert!((inch_side - 365.76).abs() < 1e-3);
}

#[test]
fn test_removed_listener_is_silent() {
    let mut model = PointsModel::with_target(Room::square(10.0), LengthUnit::Centimeter);
    let calls = Rc::new(Cell::new(0));
    let counter = calls.clone();
    let id = model.add_listener(move |_| counter.set(counter.get() + 1));

    model.move_all(1.0, 1.0);
    assert_eq!(calls.get(), 1);
    assert!(model.remove_listener(id));
    assert!(!model.remove_listener(id));
    model.move_all(1.0, 1.0);
    assert_eq!(calls.get(), 1);
}
