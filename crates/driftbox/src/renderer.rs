//! Terminal renderer
//!
//! Projects world space onto a character grid: the player draws filled, the
//! enemies draw as outlines, and a vX/vY readout follows the scene.

use drift_engine::entity::Entity;
use drift_engine::render::{Frame, Renderer};
use std::io::Write;

const PLAYER_GLYPH: char = '#';
const ENEMY_GLYPH: char = '+';

/// Renders frames as ASCII onto any writer.
pub struct AsciiRenderer<W: Write> {
    out: W,
    columns: usize,
    rows: usize,
}

impl<W: Write> AsciiRenderer<W> {
    /// Create a renderer with the given character grid resolution.
    pub fn new(out: W, columns: usize, rows: usize) -> Self {
        Self { out, columns, rows }
    }

    fn plot(&self, grid: &mut [Vec<char>], frame: &Frame, entity: &Entity, glyph: char, fill: bool) {
        let scale_x = self.columns as f32 / frame.bounds.width;
        let scale_y = self.rows as f32 / frame.bounds.height;

        let x0 = (entity.position.x * scale_x).floor() as isize;
        let y0 = (entity.position.y * scale_y).floor() as isize;
        let w = ((entity.size.x * scale_x).ceil() as isize).max(1);
        let h = ((entity.size.y * scale_y).ceil() as isize).max(1);

        for row in y0..y0 + h {
            for col in x0..x0 + w {
                let on_outline = row == y0 || row == y0 + h - 1 || col == x0 || col == x0 + w - 1;
                if !fill && !on_outline {
                    continue;
                }
                if let (Ok(r), Ok(c)) = (usize::try_from(row), usize::try_from(col)) {
                    if r < self.rows && c < self.columns {
                        grid[r][c] = glyph;
                    }
                }
            }
        }
    }
}

impl<W: Write> Renderer for AsciiRenderer<W> {
    fn draw(&mut self, frame: &Frame) {
        let mut grid = vec![vec![' '; self.columns]; self.rows];

        for enemy in frame.enemies {
            self.plot(&mut grid, frame, enemy, ENEMY_GLYPH, false);
        }
        self.plot(&mut grid, frame, frame.player, PLAYER_GLYPH, true);

        let mut screen = String::with_capacity((self.columns + 1) * (self.rows + 2));
        for row in &grid {
            screen.extend(row.iter());
            screen.push('\n');
        }
        screen.push_str(&format!(
            "vX: {:.1}  vY: {:.1}\n",
            frame.player.velocity.x, frame.player.velocity.y
        ));

        if let Err(err) = write!(self.out, "{screen}") {
            log::warn!("renderer write failed: {err}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use drift_engine::entity::WorldBounds;
    use drift_engine::foundation::math::Vec2;

    fn frame_fixture<'a>(
        player: &'a Entity,
        enemies: &'a [Entity],
        bounds: &'a WorldBounds,
    ) -> Frame<'a> {
        Frame {
            player,
            enemies,
            bounds,
        }
    }

    #[test]
    fn test_draw_plots_player_and_info_line() {
        let bounds = WorldBounds::new(400.0, 400.0, 4.0);
        let player = Entity::new(
            Vec2::new(200.0, 200.0),
            Vec2::new(16.0, 16.0),
            Vec2::new(50.0, -75.0),
            "#EFC9FF",
        );
        let mut out = Vec::new();

        {
            let mut renderer = AsciiRenderer::new(&mut out, 40, 20);
            renderer.draw(&frame_fixture(&player, &[], &bounds));
        }

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains(PLAYER_GLYPH));
        assert!(text.contains("vX: 50.0  vY: -75.0"));
    }

    #[test]
    fn test_offscreen_entity_is_clipped_not_panicking() {
        let bounds = WorldBounds::new(400.0, 400.0, 4.0);
        let player = Entity::new(
            Vec2::new(-16.0, 410.0),
            Vec2::new(16.0, 16.0),
            Vec2::new(50.0, 50.0),
            "#EFC9FF",
        );
        let mut out = Vec::new();

        let mut renderer = AsciiRenderer::new(&mut out, 40, 20);
        renderer.draw(&frame_fixture(&player, &[], &bounds));
    }
}
