// src/views/board_frame.rs
//
// Everything the renderer needs for one frame, sampled once in `update` so
// `view` can draw from an immutable snapshot.

use crate::effects::{VictoryFade, VictoryOverlay};
use crate::models::{GameSession, GridPos, TileId};
use crate::views::{BoardLayout, ScreenRect};

#[derive(Debug, Clone, PartialEq)]
pub struct TileSprite {
    pub id: TileId,
    pub label: String,
    pub rect: ScreenRect,
}

impl TileSprite {
    pub fn screen_x(&self) -> f32 {
        self.rect.x
    }

    pub fn screen_y(&self) -> f32 {
        self.rect.y
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoardFrame {
    pub tiles: Vec<TileSprite>,
    pub hovered: Option<GridPos>,
    pub highlight: Option<ScreenRect>,
    pub victory: Option<VictoryOverlay>,
}

impl BoardFrame {
    pub fn capture(
        session: &mut GameSession,
        layout: &BoardLayout,
        fade: &VictoryFade,
        hovered: Option<GridPos>,
        now: f32,
    ) -> Self {
        let tiles = session
            .sample(now)
            .into_iter()
            .map(|sample| TileSprite {
                id: sample.id,
                label: sample.id.to_string(),
                rect: layout.tile_rect(sample.position),
            })
            .collect();

        Self {
            tiles,
            hovered,
            highlight: hovered.map(|cell| layout.cell_rect(cell)),
            victory: fade.overlay(session.victory_time(), now),
        }
    }

    pub fn show_banner(&self) -> bool {
        self.victory.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{BoardConfig, WindowConfig};
    use crate::models::Shuffler;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn solved_session() -> GameSession {
        GameSession::new(Shuffler::new(0), 1.0, StdRng::seed_from_u64(0))
    }

    #[test]
    fn test_capture_solved_board() {
        let layout = BoardLayout::new(&WindowConfig::default(), &BoardConfig::default());
        let mut session = solved_session();
        let frame = BoardFrame::capture(&mut session, &layout, &VictoryFade::default(), None, 0.0);

        assert_eq!(frame.tiles.len(), 15);
        let first = &frame.tiles[0];
        assert_eq!(first.label, "1");
        assert_eq!((first.screen_x(), first.screen_y()), (121.0, 121.0));
        assert!(frame.highlight.is_none());
        assert!(!frame.show_banner());
    }

    #[test]
    fn test_capture_mid_slide_and_victory() {
        let layout = BoardLayout::new(&WindowConfig::default(), &BoardConfig::default());
        let mut session = solved_session();
        assert!(session.try_move(GridPos::new(3, 2), 0.0));

        let hovered = Some(GridPos::new(3, 2));
        let frame = BoardFrame::capture(&mut session, &layout, &VictoryFade::default(), hovered, 0.5);

        let twelve = frame.tiles.iter().find(|s| s.label == "12").unwrap();
        // halfway down from row 2 to row 3
        assert_eq!(twelve.screen_y(), 118.0 + 166.0 * 2.5 + 3.0);
        assert_eq!(frame.highlight, Some(layout.cell_rect(GridPos::new(3, 2))));
        assert!(frame.show_banner());
        assert_eq!(frame.victory.unwrap().message_alpha, 0.0);
    }
}
