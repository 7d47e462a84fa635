// src/main.rs
use nannou::event::TouchEvent;
use nannou::prelude::*;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use almost15::{
    config::Config,
    controllers::InputController,
    draw::{draw_board, BoardStyle},
    effects::VictoryFade,
    models::GameSession,
    views::{world_to_device, BoardFrame, BoardLayout},
};

struct Model {
    // Core components:
    session: GameSession,
    layout: BoardLayout,

    // Input
    input: InputController,

    // Presentation
    style: BoardStyle,
    victory_fade: VictoryFade,
    frame: BoardFrame,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    nannou::app(model).update(update).run();
}

fn model(app: &App) -> Model {
    // Load config, falling back to the built-in defaults
    let config = match Config::load() {
        Ok(config) => config,
        Err(err) => {
            warn!(error = %err, "using default config");
            Config::default()
        }
    };

    app.new_window()
        .title(&config.window.title)
        .size(config.window.width, config.window.height)
        .resizable(false)
        .view(view)
        .key_pressed(key_pressed)
        .touch(touch)
        .build()
        .expect("Failed to create window");

    let layout = BoardLayout::new(&config.window, &config.board);
    let session = GameSession::from_config(&config);
    info!(
        width = config.window.width,
        height = config.window.height,
        move_duration = config.animation.move_duration,
        "started"
    );

    Model {
        session,
        layout,
        input: InputController::new(),
        style: BoardStyle::new(&config.style, &config.board, &config.victory),
        victory_fade: VictoryFade::from_config(&config.victory),
        frame: BoardFrame::default(),
    }
}

fn key_pressed(_app: &App, model: &mut Model, key: Key) {
    if key == Key::R {
        info!("reshuffle requested");
        model.session.reshuffle();
    }
}

fn touch(app: &App, model: &mut Model, event: TouchEvent) {
    let position = world_to_device(event.position, app.window_rect());
    model
        .input
        .handle_touch(event.id, event.phase.into(), position);
}

fn update(app: &App, model: &mut Model, _update: Update) {
    let now = app.time;

    let mouse = world_to_device(app.mouse.position(), app.window_rect());
    let mouse_down = app.mouse.buttons.left().is_down();
    let pointer = model.input.frame(&model.layout, mouse, mouse_down);

    if let Some(cell) = pointer.move_request() {
        model.session.try_move(cell, now);
    }
    model.session.update_victory(now);

    model.frame = BoardFrame::capture(
        &mut model.session,
        &model.layout,
        &model.victory_fade,
        pointer.hovered,
        now,
    );
}

// Draw the state of Model into the given Frame
fn view(app: &App, model: &Model, frame: Frame) {
    let draw = app.draw();
    draw_board(
        &draw,
        app.window_rect(),
        &model.layout,
        &model.style,
        &model.frame,
    );

    if let Err(err) = draw.to_frame(app, &frame) {
        warn!(error = ?err, "failed to render frame");
    }
}
