//! Vertices of a regular polygon via polar construction.
//!
//! Walks `n` equal steps of `100/n` percent around the circle, prints each
//! vertex, and checks that the edge vectors close the loop.
//!
//! Run: `cargo run -p planar --example regular_polygon -- 7`

use planar::prelude::*;

fn main() {
    let n: usize = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(6)
        .max(3);
    let step = 100.0 / n as f64;
    let verts: Vec<Vec2d> = (0..n)
        .map(|k| Vec2d::from_polar(1.0, Angle::from_percent(step * k as f64)))
        .collect();

    for (k, v) in verts.iter().enumerate() {
        println!("v{k}: {v:.6}  |v|={:.6}  dir={:.3}", v.length(), v.angle());
    }

    let closing: Vec2d = (0..n).map(|k| verts[(k + 1) % n] - verts[k]).sum();
    let side = (verts[1] - verts[0]).length();
    println!("side={side:.6} perimeter={:.6}", side * n as f64);
    assert!(
        Tolerance::default().vectors(closing, Vec2d::ZERO),
        "edges should close the loop, got {closing}"
    );
}
