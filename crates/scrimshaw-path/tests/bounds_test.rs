use scrimshaw_path::{BoundingBox, CurvePath, bounds, ellipse_path, path_bounds, point, to_curves};

#[test]
fn cubic_bulge_is_included() {
    let b = path_bounds("M0,0 C0,100 100,100 100,0");
    assert_eq!(
        b,
        BoundingBox {
            x: 0.0,
            y: 0.0,
            width: 100.0,
            height: 75.0,
        }
    );
}

#[test]
fn control_points_outside_the_curve_do_not_count() {
    let b = path_bounds("M0,0 C-50,0 150,0 100,0");
    assert!(b.x < 0.0 && b.x > -50.0);
    assert!(b.x + b.width > 100.0 && b.x + b.width < 150.0);
    assert_eq!(b.height, 0.0);
}

#[test]
fn empty_path_has_a_zero_box() {
    assert_eq!(bounds(&CurvePath::default()), BoundingBox::default());
}

#[test]
fn lone_moveto_is_a_point_box() {
    let b = path_bounds("M5,7");
    assert_eq!(
        b,
        BoundingBox {
            x: 5.0,
            y: 7.0,
            width: 0.0,
            height: 0.0,
        }
    );
}

#[test]
fn separate_subpaths_are_all_covered() {
    let b = path_bounds("M0,0 L10,10 M-5,20 L-4,21");
    assert_eq!(
        b,
        BoundingBox {
            x: -5.0,
            y: 0.0,
            width: 15.0,
            height: 21.0,
        }
    );
}

#[test]
fn ellipse_bounds_are_tight() {
    let b = bounds(&to_curves(&ellipse_path(point(50.0, 50.0), 40.0, 20.0)));
    assert!((b.x - 10.0).abs() < 0.1, "{b:?}");
    assert!((b.y - 30.0).abs() < 0.1, "{b:?}");
    assert!((b.width - 80.0).abs() < 0.2, "{b:?}");
    assert!((b.height - 40.0).abs() < 0.2, "{b:?}");
}

#[test]
fn contains_is_inclusive() {
    let b = path_bounds("M0,0 L10,10");
    assert!(b.contains(point(0.0, 0.0)));
    assert!(b.contains(point(10.0, 5.0)));
    assert!(!b.contains(point(10.5, 5.0)));
}

#[test]
fn bounding_box_serializes_by_field_name() {
    let b = path_bounds("M1,2 L4,6");
    let json = serde_json::to_value(b).unwrap();
    assert_eq!(
        json,
        serde_json::json!({ "x": 1.0, "y": 2.0, "width": 3.0, "height": 4.0 })
    );
}
