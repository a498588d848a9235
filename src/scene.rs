//! Declarative frame description
//!
//! The simulation never draws. Each frame it is flattened into an ordered
//! list of draw ops that an external renderer interprets however it likes
//! (GPU sprites, terminal cells, a test harness). Ops are emitted back to
//! front: background, ground, clouds, hazards, player, HUD, then the
//! game-over overlay.

use crate::consts::*;
use crate::sim::{GameSession, Hazard, HazardKind, Phase, Player, Pose, Rect};

/// Which sprite sheet entry to draw; frame indices select animation cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpriteId {
    PlayerRun { frame: u8 },
    PlayerJump,
    PlayerDuck,
    CactusSmall,
    CactusLarge,
    Bird { frame: u8 },
    Cloud,
}

/// One renderer instruction
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    /// Clear to the sky color
    Background,
    /// Solid strip from the ground line to the bottom edge
    GroundStrip,
    /// Ground texture, shifted left by the scroll offset in (-width, 0]
    GroundTexture { offset: f32 },
    Sprite { id: SpriteId, bounds: Rect },
    ScoreText { score: u64 },
    HighScoreText { high_score: u64 },
    /// Dim the playfield; game over only
    Overlay,
    /// Replay control glyph at its fixed bounds; game over only
    ReplayGlyph { bounds: Rect },
}

/// A complete frame, ready for the external renderer
#[derive(Debug, Clone, Default)]
pub struct Scene {
    pub ops: Vec<DrawOp>,
}

/// Fixed screen bounds of the replay control
pub fn replay_bounds() -> Rect {
    let (x, y, w, h) = REPLAY_BUTTON;
    Rect::new(x, y, w, h)
}

/// Sprite for the player's current pose and animation frame
fn player_sprite(player: &Player) -> SpriteId {
    if !player.grounded() {
        SpriteId::PlayerJump
    } else if player.pose == Pose::Ducking {
        SpriteId::PlayerDuck
    } else {
        SpriteId::PlayerRun {
            frame: player.anim_frame,
        }
    }
}

fn hazard_sprite(hazard: &Hazard) -> SpriteId {
    match hazard.kind {
        HazardKind::Cactus(size) => match size {
            crate::sim::CactusSize::Small => SpriteId::CactusSmall,
            crate::sim::CactusSize::Large => SpriteId::CactusLarge,
        },
        HazardKind::Bird { .. } => SpriteId::Bird {
            frame: hazard.anim_frame,
        },
    }
}

/// Flatten the session into one frame's draw ops
pub fn build_scene(session: &GameSession) -> Scene {
    let mut ops = Vec::with_capacity(8 + session.clouds.len() + session.hazards.len());

    ops.push(DrawOp::Background);
    ops.push(DrawOp::GroundStrip);
    ops.push(DrawOp::GroundTexture {
        offset: session.ground_offset,
    });

    for cloud in &session.clouds {
        ops.push(DrawOp::Sprite {
            id: SpriteId::Cloud,
            bounds: cloud.bounds,
        });
    }
    for hazard in &session.hazards {
        ops.push(DrawOp::Sprite {
            id: hazard_sprite(hazard),
            bounds: hazard.bounds,
        });
    }
    ops.push(DrawOp::Sprite {
        id: player_sprite(&session.player),
        bounds: session.player.bounds,
    });

    ops.push(DrawOp::ScoreText {
        score: session.score,
    });
    ops.push(DrawOp::HighScoreText {
        high_score: session.high_score,
    });

    if session.phase == Phase::GameOver {
        ops.push(DrawOp::Overlay);
        ops.push(DrawOp::ReplayGlyph {
            bounds: replay_bounds(),
        });
    }

    Scene { ops }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{tick, TickInput};

    #[test]
    fn test_running_scene_has_no_overlay() {
        let session = GameSession::new(1, 0);
        let scene = build_scene(&session);
        assert!(!scene.ops.iter().any(|op| matches!(op, DrawOp::Overlay)));
        assert!(!scene
            .ops
            .iter()
            .any(|op| matches!(op, DrawOp::ReplayGlyph { .. })));
    }

    #[test]
    fn test_game_over_scene_ends_with_overlay_and_glyph() {
        let mut session = GameSession::new(1, 0);
        session.phase = Phase::GameOver;
        let scene = build_scene(&session);
        let n = scene.ops.len();
        assert!(matches!(scene.ops[n - 2], DrawOp::Overlay));
        assert!(matches!(scene.ops[n - 1], DrawOp::ReplayGlyph { .. }));
    }

    #[test]
    fn test_scene_starts_back_to_front() {
        let session = GameSession::new(1, 0);
        let scene = build_scene(&session);
        assert_eq!(scene.ops[0], DrawOp::Background);
        assert_eq!(scene.ops[1], DrawOp::GroundStrip);
        assert!(matches!(scene.ops[2], DrawOp::GroundTexture { .. }));
    }

    #[test]
    fn test_player_sprite_follows_pose() {
        let mut session = GameSession::new(1, 0);
        let sprite_of = |s: &GameSession| {
            build_scene(s)
                .ops
                .iter()
                .find_map(|op| match op {
                    DrawOp::Sprite {
                        id:
                            id @ (SpriteId::PlayerRun { .. }
                            | SpriteId::PlayerJump
                            | SpriteId::PlayerDuck),
                        ..
                    } => Some(*id),
                    _ => None,
                })
                .unwrap()
        };

        assert_eq!(sprite_of(&session), SpriteId::PlayerRun { frame: 0 });

        tick(
            &mut session,
            &TickInput {
                duck_held: true,
                ..Default::default()
            },
        );
        assert_eq!(sprite_of(&session), SpriteId::PlayerDuck);

        tick(
            &mut session,
            &TickInput {
                jump: true,
                ..Default::default()
            },
        );
        assert_eq!(sprite_of(&session), SpriteId::PlayerJump);
    }

    #[test]
    fn test_scene_counts_entities() {
        let mut session = GameSession::new(1, 0);
        // Run long enough that some hazards and clouds exist
        for _ in 0..5000 {
            tick(&mut session, &TickInput::default());
            if session.phase == Phase::GameOver {
                tick(
                    &mut session,
                    &TickInput {
                        reset: true,
                        ..Default::default()
                    },
                );
            }
        }
        let scene = build_scene(&session);
        let sprites = scene
            .ops
            .iter()
            .filter(|op| matches!(op, DrawOp::Sprite { .. }))
            .count();
        assert_eq!(sprites, 1 + session.hazards.len() + session.clouds.len());
    }
}
