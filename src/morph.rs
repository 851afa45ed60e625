use std::f32::consts::PI;
use std::fmt::{Display, Formatter};
use ggez::glam::Vec2;
use crate::point::Point;
use crate::shape::Shape;

const TWO_PI: f32 = 2.0 * PI;
const SPEED_UP_STEP: f32 = 0.01;
const SPEED_DOWN_STEP: f32 = 0.001;
const MAX_SPEED: f32 = 0.2;
const MIN_SPEED: f32 = 0.001;

/// Animation state: a ring of points chasing the outline of the active
/// shape, one step per tick.
pub struct Morph {
    points: Vec<Point>,
    targets: Vec<Vec2>,
    shape: Shape,
    t: f32,
    speed: f32,
    paused: bool,
    center: Vec2,
    radius: f32,
}

impl Morph {
    pub fn new(center: Vec2, radius: f32, point_count: usize, speed: f32) -> Self {
        let points = (0..point_count)
            .map(|i| Point::from_polar(i as f32 * TWO_PI / point_count as f32, radius, center))
            .collect();
        let shape = Shape::Triangle;
        Self {
            points,
            targets: shape.outline(center, radius, point_count),
            shape,
            t: 0.0,
            speed,
            paused: false,
            center,
            radius,
        }
    }

    /// One tick: advance the progress scalar and close a `speed`-sized
    /// fraction of every point's gap to its target. Suspended entirely
    /// while paused. `t` keeps any overshoot past 1 from its last
    /// increment; the guard only stops further growth.
    pub fn update(&mut self) {
        if self.paused {
            return;
        }
        if self.t < 1.0 {
            self.t += self.speed;
        }
        for (point, target) in self.points.iter_mut().zip(&self.targets) {
            point.step_toward(*target, self.speed);
        }
    }

    /// Hard reset: every point jumps back onto the circle, progress to 0.
    pub fn reset(&mut self) {
        self.t = 0.0;
        for point in &mut self.points {
            point.reset(self.radius, self.center);
        }
    }

    /// Retargets the morph. Points keep their current positions and
    /// start chasing the new outline from wherever they are.
    pub fn set_shape(&mut self, shape: Shape) {
        self.shape = shape;
        self.targets = shape.outline(self.center, self.radius, self.points.len());
        self.t = 0.0;
    }

    pub fn speed_up(&mut self) {
        self.speed = f32::min(self.speed + SPEED_UP_STEP, MAX_SPEED);
    }

    pub fn slow_down(&mut self) {
        self.speed = f32::max(self.speed - SPEED_DOWN_STEP, MIN_SPEED);
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    pub fn progress(self: &Self) -> f32 {
        self.t
    }

    pub fn speed(self: &Self) -> f32 {
        self.speed
    }

    pub fn paused(self: &Self) -> bool {
        self.paused
    }

    pub fn shape(self: &Self) -> Shape {
        self.shape
    }

    pub fn targets(self: &Self) -> &[Vec2] {
        &self.targets
    }

    pub fn positions(self: &Self) -> Vec<Vec2> {
        self.points.iter().map(|p| p.pos).collect()
    }
}

impl Display for Morph {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "t: {:.2}", self.t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CENTER: Vec2 = Vec2::new(400.0, 300.0);

    fn morph() -> Morph {
        Morph::new(CENTER, 200.0, 60, 0.05)
    }

    #[test]
    fn update_advances_progress_and_moves_points() {
        let mut morph = morph();
        let before = morph.positions();

        morph.update();

        assert!((morph.progress() - 0.05).abs() < 1e-6);
        let after = morph.positions();
        let moved = before
            .iter()
            .zip(&after)
            .filter(|(b, a)| (**b - **a).length() > 1e-3)
            .count();
        assert!(moved > 0);
    }

    #[test]
    fn paused_freezes_everything() {
        let mut morph = morph();
        morph.update();
        morph.toggle_pause();
        let t = morph.progress();
        let positions = morph.positions();

        for _ in 0..25 {
            morph.update();
        }

        assert_eq!(morph.progress(), t);
        assert_eq!(morph.positions(), positions);
    }

    #[test]
    fn reset_restores_the_circle() {
        let mut morph = morph();
        let ring = morph.positions();

        for _ in 0..30 {
            morph.update();
        }
        assert!(morph.progress() > 0.0);

        morph.reset();
        assert_eq!(morph.progress(), 0.0);
        for (restored, original) in morph.positions().iter().zip(&ring) {
            assert!((*restored - *original).length() < 1e-4);
        }
    }

    #[test]
    fn shape_switch_keeps_positions_and_resets_progress() {
        let mut morph = morph();
        for _ in 0..10 {
            morph.update();
        }
        let mid_flight = morph.positions();

        morph.set_shape(Shape::Square);

        assert_eq!(morph.shape(), Shape::Square);
        assert_eq!(morph.progress(), 0.0);
        assert_eq!(morph.positions(), mid_flight);
        let square = Shape::Square.outline(CENTER, 200.0, 60);
        assert_eq!(morph.targets(), &square[..]);
    }

    #[test]
    fn speed_is_clamped_on_both_ends() {
        let mut morph = morph();
        for _ in 0..100 {
            morph.speed_up();
        }
        assert!((morph.speed() - MAX_SPEED).abs() < 1e-6);

        for _ in 0..1000 {
            morph.slow_down();
        }
        assert!((morph.speed() - MIN_SPEED).abs() < 1e-6);
    }

    #[test]
    fn progress_keeps_its_overshoot() {
        let mut morph = Morph::new(CENTER, 200.0, 12, 0.15);
        for _ in 0..7 {
            morph.update();
        }
        let overshot = morph.progress();
        assert!(overshot > 1.0);

        morph.update();
        assert_eq!(morph.progress(), overshot);
    }
}
