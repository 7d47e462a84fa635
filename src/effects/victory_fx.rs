// src/effects/victory_fx.rs
//
// Time-gated reveal of the victory text. The banner appears as soon as the
// win is latched; the secondary message waits `delay` seconds and then fades
// in over `duration`.

use crate::config::VictoryConfig;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VictoryOverlay {
    pub elapsed: f32,       // seconds since the win
    pub message_alpha: f32, // 0.0 hidden .. 1.0 fully shown
}

#[derive(Debug, Clone)]
pub struct VictoryFade {
    pub delay: f32,
    pub duration: f32,
}

impl Default for VictoryFade {
    fn default() -> Self {
        Self {
            delay: 3.0,
            duration: 5.0,
        }
    }
}

impl VictoryFade {
    pub fn from_config(config: &VictoryConfig) -> Self {
        Self {
            delay: config.message_delay,
            duration: config.message_fade,
        }
    }

    pub fn message_alpha(&self, victory_time: f32, now: f32) -> f32 {
        if self.duration.abs() < 0.001 {
            return if now - victory_time >= self.delay { 1.0 } else { 0.0 };
        }
        ((now - victory_time - self.delay) / self.duration).clamp(0.0, 1.0)
    }

    /// None until the game has been won.
    pub fn overlay(&self, victory_time: Option<f32>, now: f32) -> Option<VictoryOverlay> {
        victory_time.map(|won_at| VictoryOverlay {
            elapsed: now - won_at,
            message_alpha: self.message_alpha(won_at, now),
        })
    }
}
