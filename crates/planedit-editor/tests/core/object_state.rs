use std::f32::consts::{FRAC_PI_2, PI, TAU};

use planedit_editor::builders::{flip, rotation_about, translation};
use planedit_editor::{
    Camera, Command, Compass, DimensionLine, Furniture, Label, ObjectState, Plan, Polyline, Room,
    Texture, Transform, TransformCommand, TransformOptions, Wall, WallEnd,
};

fn near(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-3
}

fn styled_wall() -> Wall {
    let mut wall = Wall::new(0.0, 0.0, 200.0, 0.0, 10.0);
    wall.left_side_color = Some(0xFFFF_0000);
    wall.right_side_color = Some(0xFF00_FF00);
    wall.left_side_texture = Some(Texture::new("brick", 20.0, 10.0));
    wall
}

#[test]
fn test_capture_missing_object() {
    let plan = Plan::new();
    assert!(ObjectState::capture(&plan, 7).is_none());
}

#[test]
fn test_wall_styles_swap_under_mirroring() {
    let mut plan = Plan::new();
    let id = plan.add(styled_wall());
    plan.set_selected_items(vec![id]);
    let mut command = TransformCommand::capture("Flip", &plan);
    let bounds = command.bounds(&plan);

    command.apply(&mut plan, flip(&bounds, true, false), true, true);
    let wall = plan.wall(id).unwrap();
    assert_eq!(wall.left_side_color, Some(0xFF00_FF00));
    assert_eq!(wall.right_side_color, Some(0xFFFF_0000));
    assert_eq!(wall.left_side_texture, None);
    assert_eq!(wall.right_side_texture, Some(Texture::new("brick", 20.0, 10.0)));
    assert_eq!(wall.start(), [200.0, 0.0]);
    assert_eq!(wall.end(), [0.0, 0.0]);

    // a non mirroring transform from the same snapshot keeps the original sides
    command.apply(&mut plan, translation(10.0, 0.0), true, true);
    let wall = plan.wall(id).unwrap();
    assert_eq!(wall.left_side_color, Some(0xFFFF_0000));
    assert_eq!(wall.right_side_texture, None);
}

#[test]
fn test_two_successive_mirrors_restore_styles() {
    let mut plan = Plan::new();
    let id = plan.add(styled_wall());
    plan.set_selected_items(vec![id]);

    for _ in 0..2 {
        let mut command = TransformCommand::capture("Flip", &plan);
        let bounds = command.bounds(&plan);
        command.apply(&mut plan, flip(&bounds, false, true), true, true);
    }
    assert_eq!(plan.wall(id).unwrap(), &styled_wall());
}

#[test]
fn test_dimension_line_keeps_reading_left_to_right() {
    let mut plan = Plan::new();
    let id = plan.add(DimensionLine::new(0.0, 0.0, 100.0, 0.0, 20.0));
    plan.set_selected_items(vec![id]);
    let mut command = TransformCommand::capture("Flip", &plan);
    let bounds = command.bounds(&plan);

    command.apply(&mut plan, flip(&bounds, true, false), true, true);
    let line = plan.dimension_line(id).unwrap();
    assert_eq!(line.start(), [0.0, 0.0]);
    assert_eq!(line.end(), [100.0, 0.0]);
    assert_eq!(line.offset, 20.0);

    command.apply(&mut plan, flip(&bounds, false, true), true, true);
    let line = plan.dimension_line(id).unwrap();
    assert_eq!(line.start(), [0.0, 0.0]);
    assert_eq!(line.offset, -20.0);
}

#[test]
fn test_dimension_line_half_turn_swaps_ends() {
    let mut plan = Plan::new();
    let id = plan.add(DimensionLine::new(0.0, 0.0, 100.0, 0.0, 20.0));
    plan.set_selected_items(vec![id]);
    let mut command = TransformCommand::capture("Rotate", &plan);

    command.apply(&mut plan, rotation_about(180.0, [50.0, 0.0]), true, true);
    let line = plan.dimension_line(id).unwrap();
    assert!(line.x_start < line.x_end);
    assert!(near(line.x_start, 0.0) && near(line.x_end, 100.0));
    assert_eq!(line.offset, -20.0);
}

#[test]
fn test_furniture_mirroring() {
    let mut plan = Plan::new();
    let id = plan.add(Furniture::new("bed", 100.0, 100.0, 60.0, 40.0));
    plan.set_selected_items(vec![id]);
    let mut command = TransformCommand::capture("Flip", &plan);
    let bounds = command.bounds(&plan);

    command.apply(&mut plan, flip(&bounds, true, false), true, true);
    let bed = plan.furniture(id).unwrap();
    assert!(bed.model_mirrored);
    assert!(near(bed.x, 100.0) && near(bed.y, 100.0));
    assert!(near(bed.width, 60.0) && near(bed.depth, 40.0));
    assert!(bed.angle < 1e-4 || near(bed.angle, TAU));
}

#[test]
fn test_furniture_scaling() {
    let mut plan = Plan::new();
    let id = plan.add(Furniture::new("desk", 0.0, 0.0, 120.0, 60.0).with_angle(FRAC_PI_2));
    plan.set_selected_items(vec![id]);
    let mut command = TransformCommand::capture("Resize", &plan);

    command.apply(&mut plan, Transform::scale(1.0, 2.0), true, true);
    let desk = plan.furniture(id).unwrap();
    // rotated a quarter turn, the width runs along y
    assert!(near(desk.width, 240.0));
    assert!(near(desk.depth, 60.0));
    assert!(near(desk.angle, FRAC_PI_2));
    assert!(!desk.model_mirrored);
}

#[test]
fn test_compass_rotation_and_scale() {
    let mut plan = Plan::new();
    let mut compass = Compass::new(0.0, 0.0, 100.0);
    compass.north_direction = 0.5;
    let id = plan.add(compass);
    plan.set_selected_items(vec![id]);
    let mut command = TransformCommand::capture("Rotate", &plan);

    command.apply(&mut plan, rotation_about(90.0, [0.0, 0.0]), true, true);
    let compass = plan.compass(id).unwrap();
    assert!(near(compass.diameter, 100.0));
    assert!(near(compass.north_direction, 0.5 + FRAC_PI_2));

    command.apply(&mut plan, Transform::scale(2.0, 2.0), true, true);
    let compass = plan.compass(id).unwrap();
    assert!(near(compass.diameter, 200.0));
    assert!(near(compass.north_direction, 0.5));
}

#[test]
fn test_room_labels_follow_the_room() {
    let mut plan = Plan::new();
    let mut room = Room::square(100.0).with_name("Kitchen");
    room.name_x_offset = 10.0;
    room.name_angle = 0.3;
    room.area_y_offset = 20.0;
    let id = plan.add(room);
    plan.set_selected_items(vec![id]);
    let mut command = TransformCommand::capture("Move", &plan);

    command.apply(&mut plan, translation(50.0, 0.0), true, true);
    let room = plan.room(id).unwrap();
    assert_eq!(room.center(), [100.0, 50.0]);
    assert_eq!((room.name_x_offset, room.name_y_offset), (10.0, 0.0));
    assert_eq!((room.area_x_offset, room.area_y_offset), (0.0, 20.0));
    assert_eq!(room.name_angle, 0.3);

    let bounds = command.bounds(&plan);
    command.apply(&mut plan, flip(&bounds, true, false), true, false);
    let room = plan.room(id).unwrap();
    assert_eq!(room.name_x_offset, -10.0);
    assert!(near(room.name_angle, TAU - 0.3));
    assert_eq!(room.area_angle, 0.0);
}

#[test]
fn test_label_rotation_adjusts_text() {
    let mut plan = Plan::new();
    let id = plan.add(Label::new("north", 10.0, 0.0).with_angle(0.2));
    plan.set_selected_items(vec![id]);
    let mut command = TransformCommand::capture("Rotate", &plan);

    command.apply(&mut plan, rotation_about(180.0, [0.0, 0.0]), true, false);
    let label = plan.label(id).unwrap();
    assert!(near(label.x, -10.0) && near(label.y, 0.0));
    assert!(near(label.angle, PI + 0.2));

    command.apply(&mut plan, rotation_about(180.0, [0.0, 0.0]), true, true);
    assert!(near(plan.label(id).unwrap().angle, 0.2));

    command.apply(&mut plan, rotation_about(180.0, [0.0, 0.0]), false, true);
    assert_eq!(plan.label(id).unwrap().angle, 0.2);
}

#[test]
fn test_camera_and_polyline_positions() {
    let mut plan = Plan::new();
    let camera = plan.add(Camera::new(10.0, 10.0, 170.0, 1.0));
    let line = plan.add(Polyline::new(vec![[0.0, 0.0], [20.0, 5.0]]));
    plan.set_selected_items(vec![camera, line]);
    let mut command = TransformCommand::capture("Move", &plan);

    command.apply(&mut plan, translation(-10.0, 5.0), true, true);
    assert_eq!(plan.camera(camera).unwrap(), &Camera::new(0.0, 15.0, 170.0, 1.0));
    assert_eq!(plan.polyline(line).unwrap().points(), &[[-10.0, 5.0], [10.0, 10.0]]);
}

#[test]
fn test_options_expose_orientation() {
    let options = TransformOptions::new(Transform::scale(-1.0, 1.0), true, true);
    assert!(options.is_h_flip());
    assert!(!options.is_v_flip());
    assert!(!options.is_rotation());
    assert!(options.is_mirroring());
}

/// Two walls joined at a point they do not quite share.
fn loosely_joined_walls() -> (Plan, u64, u64) {
    let mut plan = Plan::new();
    let a = plan.add(Wall::new(0.0, 0.0, 100.0, 0.0, 10.0));
    let b = plan.add(Wall::new(100.0, 0.5, 100.0, 200.0, 10.0));
    plan.join_walls(a, WallEnd::End, b, WallEnd::Start);
    (plan, a, b)
}

#[test]
fn test_undo_restores_offset_neighbor_joint() {
    let (mut plan, a, b) = loosely_joined_walls();
    plan.set_selected_items(vec![a]);
    let original = plan.clone();
    let mut command = TransformCommand::capture("Move", &plan);

    command.apply(&mut plan, translation(50.0, 0.0), true, true);
    assert_eq!(plan.wall(b).unwrap().start(), [150.0, 0.0]);

    command.undo(&mut plan);
    assert_eq!(plan.wall(b).unwrap().start(), [100.0, 0.5]);
    assert_eq!(plan, original);
}

#[test]
fn test_undo_restores_both_selected_joined_walls() {
    let (mut plan, a, b) = loosely_joined_walls();
    plan.set_selected_items(vec![b, a]);
    let original = plan.clone();
    let mut command = TransformCommand::capture("Rotate", &plan);

    command.apply(&mut plan, rotation_about(30.0, [100.0, 0.0]), true, true);
    command.undo(&mut plan);
    assert_eq!(plan, original);
}

#[test]
fn test_identity_after_reset_restores_exactly() {
    let mut plan = Plan::new();
    let mut room = Room::square(100.0).with_name("Hall");
    room.name_x_offset = 0.1;
    room.area_y_offset = 33.3;
    room.name_angle = 2.0;
    let room = plan.add(room);
    let sofa = plan.add(Furniture::new("sofa", 37.7, 12.9, 90.1, 60.3).with_angle(0.3));
    let mut compass = Compass::new(11.1, 22.2, 77.7);
    compass.north_direction = 0.7;
    let compass = plan.add(compass);
    let label = plan.add(Label::new("upside down", 5.0, 5.0).with_angle(2.5));
    let wall = plan.add(Wall::new(0.0, 0.0, 100.0, 0.0, 10.0));
    let neighbor = plan.add(Wall::new(100.0, 0.5, 100.0, 200.0, 10.0));
    plan.join_walls(wall, WallEnd::End, neighbor, WallEnd::Start);
    let original = plan.clone();

    let states: Vec<ObjectState> = [room, sofa, compass, label, wall]
        .iter()
        .map(|&id| ObjectState::capture(&plan, id).unwrap())
        .collect();
    let identity = TransformOptions::new(Transform::identity(), true, true);
    assert!(identity.is_identity());

    for state in &states {
        state.reset(&mut plan);
        state.transform(&mut plan, &identity);
    }
    assert_eq!(plan, original);

    // a dialog reset to "rotate 0" or "move 0, 0" lands on the identity too
    let mut command = TransformCommand::capture("Rotate", &plan);
    command.apply(&mut plan, rotation_about(0.0, [40.0, 40.0]), true, true);
    command.apply(&mut plan, translation(0.0, 0.0), true, true);
    assert_eq!(plan, original);
}
