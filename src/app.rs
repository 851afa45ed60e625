use ggez::event;
use ggez::glam::Vec2;
use ggez::graphics::{Canvas, Color, DrawParam, Mesh, MeshBuilder, Text};
use ggez::input::keyboard::{KeyCode, KeyInput};
use ggez::{Context, GameResult};
use log::debug;

use crate::config::Config;
use crate::morph::Morph;
use crate::shape::Shape;
use crate::utils::{interpolate_color, Rgb};

const STROKE_WIDTH: f32 = 2.0;
const READOUT_DEST: Vec2 = Vec2::new(10.0, 10.0);

pub struct MorphApp {
    morph: Morph,
    fps: u32,
    background: Color,
    start_color: Rgb,
    end_color: Rgb,
}

impl MorphApp {
    pub fn new(config: &Config) -> MorphApp {
        let center = Vec2::new(config.window_width / 2.0, config.window_height / 2.0);
        MorphApp {
            morph: Morph::new(
                center,
                config.radius,
                config.points_count,
                config.animation_speed,
            ),
            fps: config.fps,
            background: Color::from_rgb(
                config.background_color[0],
                config.background_color[1],
                config.background_color[2],
            ),
            start_color: config.circle_color,
            end_color: config.triangle_color,
        }
    }

    fn select_shape(&mut self, shape: Shape) {
        debug!("shape -> {}", shape);
        self.morph.set_shape(shape);
    }

    fn outline_mesh(&self, ctx: &mut Context, color: Color) -> GameResult<Option<Mesh>> {
        let mut points = self.morph.positions();
        if points.len() < 2 {
            // Nothing to stroke
            return Ok(None);
        }
        let first = points[0];
        points.push(first);

        let mut builder = MeshBuilder::new();
        builder.line(&points, STROKE_WIDTH, color)?;
        Ok(Some(Mesh::from_data(ctx, builder.build())))
    }
}

impl event::EventHandler<ggez::GameError> for MorphApp {
    fn update(&mut self, ctx: &mut Context) -> GameResult {
        while ctx.time.check_update_time(self.fps) {
            self.morph.update();
        }
        Ok(())
    }

    fn draw(&mut self, ctx: &mut Context) -> GameResult {
        let line_color = interpolate_color(self.start_color, self.end_color, self.morph.progress());
        let mut canvas = Canvas::from_frame(ctx, self.background);

        if let Some(mesh) = self.outline_mesh(ctx, line_color)? {
            canvas.draw(&mesh, DrawParam::new());
        }

        let readout = Text::new(self.morph.to_string());
        canvas.draw(&readout, DrawParam::new().dest(READOUT_DEST).color(Color::WHITE));

        canvas.finish(ctx)
    }

    fn key_down_event(&mut self, ctx: &mut Context, input: KeyInput, _repeated: bool) -> GameResult {
        debug!("key pressed: {:?}", input.keycode);
        match input.keycode {
            Some(KeyCode::Up) => self.morph.speed_up(),
            Some(KeyCode::Down) => self.morph.slow_down(),
            Some(KeyCode::Space) => self.morph.toggle_pause(),
            Some(KeyCode::R) => self.morph.reset(),
            Some(KeyCode::Key1) => self.select_shape(Shape::Triangle),
            Some(KeyCode::Key2) => self.select_shape(Shape::Square),
            Some(KeyCode::Escape) => ctx.request_quit(),
            _ => (),
        }
        Ok(())
    }
}
