use planedit_editor::builders::translation;
use planedit_editor::{
    Command, ConnectWallsCommand, ElevationCommand, Furniture, Plan, TransformCommand, Wall,
};

#[test]
fn test_commands_on_an_undo_stack() {
    let mut plan = Plan::new();
    let chair = plan.add(Furniture::new("chair", 50.0, 50.0, 40.0, 40.0));
    let first = plan.add(Wall::new(0.0, 0.0, 90.0, 0.0, 10.0));
    let second = plan.add(Wall::new(100.0, 0.0, 100.0, 100.0, 10.0));
    plan.set_selected_items(vec![chair, first, second]);
    let original = plan.clone();

    let mut stack: Vec<Box<dyn Command>> = Vec::new();

    let mut connect = ConnectWallsCommand::capture(&plan);
    connect.execute(&mut plan);
    stack.push(Box::new(connect));

    let mut elevate = ElevationCommand::capture(&plan);
    elevate.elevate(&mut plan, 75.0);
    stack.push(Box::new(elevate));

    let mut mover = TransformCommand::capture("Move", &plan);
    mover.apply(&mut plan, translation(0.0, 20.0), true, true);
    stack.push(Box::new(mover));

    assert_eq!(plan.furniture(chair).unwrap().elevation, 75.0);
    assert_eq!(plan.furniture(chair).unwrap().y, 70.0);
    assert_eq!(plan.wall(first).unwrap().end(), [100.0, 20.0]);
    assert_eq!(plan.wall(second).unwrap().start(), [100.0, 20.0]);

    let names: Vec<&str> = stack.iter().map(|c| c.name()).collect();
    assert_eq!(names, vec!["Connect walls", "Elevate", "Move"]);

    for command in stack.iter_mut().rev() {
        command.undo(&mut plan);
    }
    assert_eq!(plan, original);
}
