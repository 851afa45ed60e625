use ggez::glam::Vec2;

pub fn polar_to_cartesian(angle: f32, radius: f32, center: Vec2) -> Vec2 {
    Vec2::new(
        center.x + radius * f32::cos(angle),
        center.y + radius * f32::sin(angle),
    )
}

/// A point on the animated outline. Remembers the angle it was born at
/// so a reset can put it back on the circle.
pub struct Point {
    angle: f32,
    pub pos: Vec2,
}

impl Point {
    pub fn from_polar(angle: f32, radius: f32, center: Vec2) -> Self {
        Self {
            angle,
            pos: polar_to_cartesian(angle, radius, center),
        }
    }

    /// Closes a fraction `t` of the remaining gap to `target`.
    pub fn step_toward(&mut self, target: Vec2, t: f32) {
        self.pos += (target - self.pos) * t;
    }

    pub fn reset(&mut self, radius: f32, center: Vec2) {
        self.pos = polar_to_cartesian(self.angle, radius, center);
    }
}
