use planedit_editor::builders::{flip, resize, rotation_about, scale_about, translation};
use planedit_editor::geometry::map_point;
use planedit_editor::{Bounds, FixPoint, ResizeMeasure};

fn assert_point_near(actual: [f32; 2], expected: [f32; 2]) {
    assert!(
        (actual[0] - expected[0]).abs() < 1e-3 && (actual[1] - expected[1]).abs() < 1e-3,
        "{:?} != {:?}",
        actual,
        expected
    );
}

#[test]
fn test_translation_and_rotation() {
    assert_eq!(map_point(&translation(5.0, -2.0), [1.0, 1.0]), [6.0, -1.0]);
    let rotate = rotation_about(90.0, [100.0, 100.0]);
    assert_point_near(map_point(&rotate, [130.0, 100.0]), [100.0, 130.0]);
    assert_point_near(map_point(&rotate, [100.0, 100.0]), [100.0, 100.0]);
}

#[test]
fn test_flip_about_bounds_center() {
    let bounds = Bounds::new(0.0, 0.0, 400.0, 300.0);
    let horizontal = flip(&bounds, true, false);
    assert_eq!(map_point(&horizontal, [0.0, 10.0]), [400.0, 10.0]);
    let both = flip(&bounds, true, true);
    assert_eq!(map_point(&both, [0.0, 0.0]), [400.0, 300.0]);
}

#[test]
fn test_resize_factors() {
    assert_eq!(ResizeMeasure::Absolute.resize_factor(100.0, 250.0), 2.5);
    assert_eq!(ResizeMeasure::Absolute.resize_factor(0.0, 250.0), 1.0);
    assert_eq!(ResizeMeasure::Relative.resize_factor(100.0, 50.0), 1.5);
    assert_eq!(ResizeMeasure::Relative.resize_factor(0.0, 50.0), 1.0);
    assert_eq!(ResizeMeasure::Percent.resize_factor(0.0, 50.0), 0.5);
}

#[test]
fn test_measure_conversion() {
    use ResizeMeasure::*;
    assert_eq!(Absolute.convert(Relative, 200.0, 50.0), 250.0);
    assert_eq!(Absolute.convert(Percent, 200.0, 50.0), 100.0);
    assert_eq!(Relative.convert(Absolute, 200.0, 250.0), 50.0);
    assert_eq!(Relative.convert(Percent, 200.0, 150.0), 100.0);
    assert_eq!(Percent.convert(Absolute, 200.0, 100.0), 50.0);
    assert_eq!(Percent.convert(Relative, 200.0, 100.0), 150.0);
    assert_eq!(Percent.convert(Absolute, 0.0, 100.0), 100.0);
    assert_eq!(Percent.convert(Percent, 0.0, 42.0), 42.0);
}

#[test]
fn test_fix_points() {
    let bounds = Bounds::new(10.0, 20.0, 110.0, 70.0);
    assert_eq!(FixPoint::NorthWest.locate(&bounds), [10.0, 20.0]);
    assert_eq!(FixPoint::Center.locate(&bounds), [60.0, 45.0]);
    assert_eq!(FixPoint::SouthEast.locate(&bounds), [110.0, 70.0]);
    assert_eq!(FixPoint::East.locate(&bounds), [110.0, 45.0]);
    assert_eq!("se".parse::<FixPoint>().unwrap(), FixPoint::SouthEast);
    assert_eq!(FixPoint::North.to_string(), "n");
    assert!("middle".parse::<FixPoint>().is_err());
    assert_eq!("Percent".parse::<ResizeMeasure>().unwrap(), ResizeMeasure::Percent);
}

#[test]
fn test_resize_keeps_fix_point() {
    let bounds = Bounds::new(0.0, 0.0, 100.0, 50.0);

    let t = resize(&bounds, ResizeMeasure::Absolute, 200.0, 100.0, FixPoint::NorthWest);
    assert_eq!(map_point(&t, [0.0, 0.0]), [0.0, 0.0]);
    assert_eq!(map_point(&t, [100.0, 50.0]), [200.0, 100.0]);

    let t = resize(&bounds, ResizeMeasure::Percent, 200.0, 200.0, FixPoint::SouthEast);
    assert_eq!(map_point(&t, [100.0, 50.0]), [100.0, 50.0]);
    assert_eq!(map_point(&t, [0.0, 0.0]), [-100.0, -50.0]);

    let t = scale_about(0.5, 1.0, [50.0, 0.0]);
    assert_eq!(map_point(&t, [100.0, 7.0]), [75.0, 7.0]);
}
