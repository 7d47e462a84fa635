// src/draw/board_draw.rs
// Draws a BoardFrame with nannou: backing, tiles, hover highlight, victory text.

use nannou::prelude::*;

use crate::config::{BoardConfig, StyleConfig, VictoryConfig};
use crate::effects::VictoryOverlay;
use crate::views::{BoardFrame, BoardLayout, ScreenRect};

#[derive(Debug, Clone)]
pub struct BoardStyle {
    pub background: Rgba,
    pub board: Rgba,
    pub tile: Rgba,
    pub text: Rgba,
    pub highlight: Rgba,
    pub overlay: Rgba,
    pub banner: Rgba,
    pub message: Rgba,
    pub font_size: u32,
    pub banner_text: String,
    pub message_text: String,
    pub banner_font_size: u32,
    pub message_font_size: u32,
}

impl BoardStyle {
    pub fn new(style: &StyleConfig, board: &BoardConfig, victory: &VictoryConfig) -> Self {
        Self {
            background: to_rgba(style.background),
            board: to_rgba(style.board),
            tile: to_rgba(style.tile),
            text: to_rgba(style.text),
            highlight: to_rgba(style.highlight),
            overlay: to_rgba(style.overlay),
            banner: to_rgba(style.banner),
            message: to_rgba(style.message),
            font_size: board.font_size,
            banner_text: victory.banner.clone(),
            message_text: victory.message.clone(),
            banner_font_size: victory.banner_font_size,
            message_font_size: victory.message_font_size,
        }
    }
}

fn to_rgba(c: [u8; 4]) -> Rgba {
    rgba(
        c[0] as f32 / 255.0,
        c[1] as f32 / 255.0,
        c[2] as f32 / 255.0,
        c[3] as f32 / 255.0,
    )
}

/// Scales a color's alpha channel by `alpha`, clamped to [0, 1].
pub fn fade(color: Rgba, alpha: f32) -> Rgba {
    rgba(
        color.red,
        color.green,
        color.blue,
        color.alpha * alpha.clamp(0.0, 1.0),
    )
}

fn fill_rect(draw: &Draw, window: Rect, rect: &ScreenRect, color: Rgba) {
    let world = rect.to_world(window);
    draw.rect().xy(world.xy()).wh(world.wh()).color(color);
}

pub fn draw_board(draw: &Draw, window: Rect, layout: &BoardLayout, style: &BoardStyle, frame: &BoardFrame) {
    draw.background().color(style.background);

    fill_rect(draw, window, &layout.outer_rect(), style.board);

    for sprite in &frame.tiles {
        fill_rect(draw, window, &sprite.rect, style.tile);

        let world = sprite.rect.to_world(window);
        draw.text(&sprite.label)
            .xy(world.xy())
            .wh(world.wh())
            .font_size(style.font_size)
            .center_justify()
            .align_text_middle_y()
            .color(style.text);
    }

    if let Some(highlight) = &frame.highlight {
        fill_rect(draw, window, highlight, style.highlight);
    }

    if let Some(overlay) = &frame.victory {
        draw_victory(draw, window, style, overlay);
    }
}

fn draw_victory(draw: &Draw, window: Rect, style: &BoardStyle, overlay: &VictoryOverlay) {
    draw.rect()
        .xy(window.xy())
        .wh(window.wh())
        .color(style.overlay);

    let text_w = window.w();
    draw.text(&style.banner_text)
        .x_y(0.0, style.banner_font_size as f32 * 0.75)
        .w_h(text_w, style.banner_font_size as f32 * 1.5)
        .font_size(style.banner_font_size)
        .center_justify()
        .align_text_middle_y()
        .color(style.banner);

    if overlay.message_alpha > 0.0 {
        draw.text(&style.message_text)
            .x_y(0.0, -(style.message_font_size as f32))
            .w_h(text_w, style.message_font_size as f32 * 1.5)
            .font_size(style.message_font_size)
            .center_justify()
            .align_text_middle_y()
            .color(fade(style.message, overlay.message_alpha));
    }
}
