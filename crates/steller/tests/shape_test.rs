use std::f64::consts::SQRT_2;

use steller::{Point, Rect, Shape};

#[test]
fn oval_intersection_on_the_axes() {
    let shape = Shape::oval();
    let bbox = Rect::new(0.0, 0.0, 20.0, 20.0);
    assert_eq!(
        shape.intersection(bbox, Point::new(100.0, 0.0)),
        Point::new(10.0, 0.0)
    );
    assert_eq!(
        shape.intersection(bbox, Point::new(-100.0, 0.0)),
        Point::new(-10.0, 0.0)
    );
    assert_eq!(
        shape.intersection(bbox, Point::new(0.0, 100.0)),
        Point::new(0.0, 10.0)
    );
    assert_eq!(
        shape.intersection(bbox, Point::new(0.0, -100.0)),
        Point::new(0.0, -10.0)
    );
}

#[test]
fn oval_intersection_lies_on_the_ellipse() {
    let shape = Shape::oval();
    let bbox = Rect::new(5.0, -3.0, 40.0, 20.0);
    let end = Point::new(40.0, 30.0);

    let p = shape.intersection(bbox, end);
    let nx = (p.x - 5.0) / 20.0;
    let ny = (p.y + 3.0) / 10.0;
    assert!(
        (nx * nx + ny * ny - 1.0).abs() < 1e-9,
        "{p:?} is off the ellipse"
    );
    // On the ray from the center toward `end`.
    let cross = (p.x - 5.0) * (end.y + 3.0) - (p.y + 3.0) * (end.x - 5.0);
    assert!(cross.abs() < 1e-9, "{p:?} is off the segment");
    assert!(p.x > 5.0 && p.y > -3.0, "{p:?} points the wrong way");
}

#[test]
fn oval_intersection_handles_a_vertical_approach() {
    let shape = Shape::oval();
    let bbox = Rect::new(0.0, 0.0, 20.0, 20.0);
    assert_eq!(
        shape.intersection(bbox, Point::new(0.0, 50.0)),
        Point::new(0.0, 10.0)
    );
    assert_eq!(
        shape.intersection(bbox, Point::new(0.0, -50.0)),
        Point::new(0.0, -10.0)
    );
    // The center itself resolves to the boundary point above it.
    assert_eq!(
        shape.intersection(bbox, Point::new(0.0, 0.0)),
        Point::new(0.0, -10.0)
    );
}

#[test]
fn rectangle_intersection_picks_the_nearer_side() {
    let shape = Shape::rectangle();
    let bbox = Rect::new(0.0, 0.0, 40.0, 20.0);
    // Shallow approach exits through the right side.
    assert_eq!(
        shape.intersection(bbox, Point::new(100.0, 25.0)),
        Point::new(20.0, 5.0)
    );
    // Steep approach exits through the bottom edge.
    assert_eq!(
        shape.intersection(bbox, Point::new(10.0, 100.0)),
        Point::new(1.0, 10.0)
    );
}

#[test]
fn rectangle_intersection_handles_axis_aligned_approaches() {
    let shape = Shape::rectangle();
    let bbox = Rect::new(0.0, 0.0, 40.0, 20.0);
    assert_eq!(
        shape.intersection(bbox, Point::new(100.0, 0.0)),
        Point::new(20.0, 0.0)
    );
    assert_eq!(
        shape.intersection(bbox, Point::new(-100.0, 0.0)),
        Point::new(-20.0, 0.0)
    );
    assert_eq!(
        shape.intersection(bbox, Point::new(0.0, 100.0)),
        Point::new(0.0, 10.0)
    );
    assert_eq!(
        shape.intersection(bbox, Point::new(0.0, -5.0)),
        Point::new(0.0, -10.0)
    );
}

#[test]
fn oval_dimension_floors_small_labels_to_the_diameter() {
    let shape = Shape::oval();
    let label = Rect::new(10.0, 20.0, 12.0, 8.0);
    assert_eq!(shape.dimension(label), Rect::new(10.0, 20.0, 20.0, 20.0));
}

#[test]
fn oval_dimension_scales_large_labels_by_sqrt_two() {
    let shape = Shape::oval();
    let label = Rect::new(0.0, 0.0, 40.0, 30.0);
    let drawn = shape.dimension(label);
    assert_eq!(drawn.width, 40.0 * SQRT_2);
    assert_eq!(drawn.height, 30.0 * SQRT_2);
    assert_eq!(drawn.center(), label.center());
}

#[test]
fn oval_dimension_mixes_axes_independently() {
    let shape = Shape::oval();
    let label = Rect::new(0.0, 0.0, 40.0, 8.0);
    let drawn = shape.dimension(label);
    assert_eq!(drawn.width, 40.0 * SQRT_2);
    assert_eq!(drawn.height, 20.0);
}

#[test]
fn rectangle_dimension_enforces_the_minimum_extent() {
    let shape = Shape::rectangle();
    assert_eq!(
        shape.dimension(Rect::new(0.0, 0.0, 2.0, 50.0)),
        Rect::new(0.0, 0.0, 5.0, 50.0)
    );
    assert_eq!(
        shape.dimension(Rect::new(3.0, 4.0, 0.0, 0.0)),
        Rect::new(3.0, 4.0, 5.0, 5.0)
    );
}

#[test]
fn the_default_shape_is_a_default_oval() {
    assert_eq!(Shape::default(), Shape::oval());
    assert_eq!(
        Shape::oval(),
        Shape::Oval {
            diameter: Shape::DEFAULT_OVAL_DIAMETER
        }
    );
}
