#[macro_use]
extern crate derive_more;

use ggez::{event, ContextBuilder};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::app::{App, Services};
use crate::config::Resources;

mod app;
mod audio;
mod basic;
mod button;
mod color;
mod config;
mod error;
mod rendering;
mod skin;
mod snake;
mod snake_control;
mod support;

fn main() -> error::Result {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let resources = Resources::locate();
    info!("resources in {}", resources.root().display());
    let services = Services::load(resources);

    let (ctx, event_loop) = ContextBuilder::new("skin_snake", "gorilskij")
        .window_setup(app::window_setup())
        .window_mode(app::window_mode(&services.settings))
        .add_resource_path(services.resources.root())
        .build()?;

    event::run(ctx, event_loop, App::new(services))
}
