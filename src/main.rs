use std::env;

use anyhow::Context as _;
use ggez::conf::{WindowMode, WindowSetup};
use ggez::{event, ContextBuilder};
use log::info;

use circle_morph::app::MorphApp;
use circle_morph::config::Config;

const DEFAULT_CONFIG_PATH: &str = "config.json";

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let path = env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());
    let config =
        Config::load(&path).with_context(|| format!("loading configuration from {}", path))?;
    info!(
        "starting: {}x{} window, {} points, {} fps",
        config.window_width, config.window_height, config.points_count, config.fps
    );

    let (ctx, event_loop) = ContextBuilder::new("circle-morph", "circle-morph")
        .window_setup(WindowSetup::default().title("Circle -> Polygon"))
        .window_mode(WindowMode::default().dimensions(config.window_width, config.window_height))
        .build()
        .context("building the graphics context")?;

    let app = MorphApp::new(&config);
    event::run(ctx, event_loop, app)
}
