use std::f32::consts::PI;
use std::fmt::{Display, Formatter};
use ggez::glam::Vec2;

/// Target outline the circle morphs into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    Triangle,
    Square,
}

impl Shape {
    fn vertices(self: &Self, center: Vec2, radius: f32) -> Vec<Vec2> {
        match self {
            Shape::Triangle => {
                let spread = radius * f32::sin(PI / 3.0);
                let drop = radius * f32::cos(PI / 3.0);
                vec![
                    Vec2::new(center.x, center.y - radius),
                    Vec2::new(center.x - spread, center.y + drop),
                    Vec2::new(center.x + spread, center.y + drop),
                ]
            }
            Shape::Square => vec![
                Vec2::new(center.x - radius, center.y - radius),
                Vec2::new(center.x + radius, center.y - radius),
                Vec2::new(center.x + radius, center.y + radius),
                Vec2::new(center.x - radius, center.y + radius),
            ],
        }
    }

    /// Ordered outline of exactly `point_count` points, spread as evenly
    /// as possible along the edges. The first `point_count % edges` edges
    /// take the remainder. Each vertex starts its edge, so every vertex
    /// appears exactly once.
    pub fn outline(self: &Self, center: Vec2, radius: f32, point_count: usize) -> Vec<Vec2> {
        let vertices = self.vertices(center, radius);
        let edges = vertices.len();
        let base = point_count / edges;
        let remainder = point_count % edges;
        let mut points = Vec::with_capacity(point_count);

        for i in 0..edges {
            let from = vertices[i];
            let to = vertices[(i + 1) % edges];
            let n = base + if i < remainder { 1 } else { 0 };
            for j in 0..n {
                let t = j as f32 / n as f32;
                points.push(from + (to - from) * t);
            }
        }

        points.truncate(point_count);
        points
    }
}

impl Display for Shape {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Shape::Triangle => write!(f, "triangle"),
            Shape::Square => write!(f, "square"),
        }
    }
}
