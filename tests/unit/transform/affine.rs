use super::*;

fn approx(a: Point, b: Point) -> bool {
    (a.x - b.x).abs() < 1e-9 && (a.y - b.y).abs() < 1e-9
}

#[test]
fn rotate_about_keeps_pivot_fixed() {
    let pivot = Point::new(25.0, 40.0);
    for deg in [0.0, 30.0, 90.0, -45.0, 180.0] {
        assert!(approx(rotate_about(pivot, deg) * pivot, pivot), "{deg}");
    }
}

#[test]
fn positive_angle_turns_clockwise_in_y_down_space() {
    // +x axis rotated 90° clockwise on screen points down (+y).
    let t = rotate_about(Point::ORIGIN, 90.0);
    assert!(approx(t * Point::new(1.0, 0.0), Point::new(0.0, 1.0)));
}

#[test]
fn zero_rotation_placement_is_a_translation() {
    let t = place_centered_rotation(Vec2::new(175.0, 175.0), Vec2::new(50.0, 50.0), 0.0);
    assert!(approx(t * Point::ORIGIN, Point::new(175.0, 175.0)));
    assert!(approx(t * Point::new(50.0, 50.0), Point::new(225.0, 225.0)));
}

#[test]
fn placement_rotation_keeps_box_center() {
    let t = place_centered_rotation(Vec2::new(10.0, 20.0), Vec2::new(40.0, 20.0), 37.0);
    assert!(approx(t * Point::new(20.0, 10.0), Point::new(30.0, 30.0)));
}
