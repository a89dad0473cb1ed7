//! Example: closest pair of points with a printed trace.
//!
//! Run with:
//! `cargo run --example closest_pair`

use dnc_trace::problems::closest_pair::{find_closest_pair, Point};
use dnc_trace::TraceStep;

fn main() {
    let coords = [
        (2.0, 3.0),
        (12.0, 30.0),
        (40.0, 50.0),
        (5.0, 1.0),
        (12.0, 10.0),
        (3.0, 4.0),
        (25.0, 22.0),
        (28.0, 21.5),
    ];
    let points: Vec<Point> = coords
        .iter()
        .enumerate()
        .map(|(id, &(x, y))| Point::new(x, y, id))
        .collect();

    let traced = find_closest_pair(&points);

    for (i, step) in traced.steps.iter().enumerate() {
        println!("{i:>3} [{:<7}] {}", step.tag(), step.description());
        if let Some(strip) = step.strip_points() {
            let ids: Vec<usize> = strip.iter().map(|p| p.id).collect();
            println!("      strip ids: {ids:?}");
        }
    }

    let r = traced.result;
    println!(
        "Closest pair: #{} ({}, {}) and #{} ({}, {}), distance {:.6}",
        r.point1.id, r.point1.x, r.point1.y, r.point2.id, r.point2.x, r.point2.y, r.distance
    );
}
