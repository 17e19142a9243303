//! GameView: maps a `FrameSnapshot` into a terminal framebuffer.
//!
//! Pure apart from an internal animation phase; no I/O, unit-testable.
//! Snake segments are drawn at positions interpolated between the previous
//! and current tick using the snapshot's progress fraction, so movement
//! stays smooth at render rates well above the simulation rate.

use crate::core::{menu_layout, FrameSnapshot};
use crate::term::fb::{CellStyle, FrameBuffer, Rgb};
use crate::term::theme::{theme_or_default, Theme};
use crate::types::Screen;

/// Speed of the background gradient scroll, cycles per second
const BACKDROP_CYCLE_HZ: f32 = 0.06;

pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
    /// Animation phase in [0, 1); drives gradient scroll and food pulse.
    phase: f32,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 compensates for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
            phase: 0.0,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w,
            cell_h,
            phase: 0.0,
        }
    }

    /// Advance the presentation-only animation phase.
    pub fn advance(&mut self, dt: f32) {
        self.phase = (self.phase + dt * BACKDROP_CYCLE_HZ).fract();
    }

    /// Render the snapshot into `fb`, repainting every cell.
    pub fn render_into(&self, fb: &mut FrameBuffer, snapshot: &FrameSnapshot) {
        let theme = theme_or_default(snapshot.config.theme_index);
        self.draw_background(fb, theme);

        match snapshot.screen {
            Screen::Menu => self.draw_menu(fb, theme),
            Screen::Settings => self.draw_settings(fb, snapshot, theme),
            Screen::Playing => self.draw_playing(fb, snapshot, theme),
            Screen::GameOver => {
                self.draw_playing(fb, snapshot, theme);
                self.draw_game_over(fb, snapshot, theme);
            }
        }
    }

    fn draw_background(&self, fb: &mut FrameBuffer, theme: &Theme) {
        let rows = fb.height();
        for y in 0..rows {
            let t = y as f32 / (rows.saturating_sub(1)).max(1) as f32;
            let color = theme
                .background_top
                .lerp(theme.background_bottom, (t + self.phase).fract());
            fb.fill_row(y, color);
        }
    }

    fn draw_menu(&self, fb: &mut FrameBuffer, theme: &Theme) {
        let bg = theme.background_top;
        let title_y = fb.height() / 5;
        fb.put_str_centered(title_y, "T U I   S N A K E", CellStyle::colors(theme.accent, bg).bold());

        let info = CellStyle::colors(Rgb::new(240, 244, 255), bg);
        let instructions = [
            "Press ENTER or click Start to begin",
            "Arrow keys / WASD to move",
            "ESC pauses back to this menu",
        ];
        for (i, line) in instructions.iter().enumerate() {
            fb.put_str_centered(title_y + 2 + i as u16, line, info);
        }

        let label = CellStyle::colors(Rgb::new(25, 25, 25), theme.accent).bold();
        for button in menu_layout((fb.width(), fb.height())) {
            let rect = button.rect;
            fb.fill_rect(rect.x, rect.y, rect.w, rect.h, ' ', label);
            let text = button.action.label();
            let tx = rect.x + rect.w.saturating_sub(text.chars().count() as u16) / 2;
            fb.put_str(tx, rect.y + rect.h / 2, text, label);
        }
    }

    fn draw_settings(&self, fb: &mut FrameBuffer, snapshot: &FrameSnapshot, theme: &Theme) {
        let bg = theme.background_top;
        let config = &snapshot.config;
        fb.put_str_centered(2, "Settings", CellStyle::colors(theme.accent, bg).bold());

        let value_style = CellStyle::colors(Rgb::new(245, 245, 248), bg);
        let hint_style = CellStyle::colors(Rgb::new(220, 220, 230), bg).dim();
        let theme_name = theme_or_default(config.theme_index).name;
        let sound = if config.sound_enabled { "On" } else { "Off" };

        let rows: [(String, &str); 5] = [
            (format!("Grid Width: {}", config.grid_width), "[ / ]"),
            (format!("Grid Height: {}", config.grid_height), ", / ."),
            (format!("Speed: {:.1}", config.move_speed), "- / +"),
            (format!("Sound: {sound}"), "S"),
            (format!("Theme: {theme_name}"), "T"),
        ];

        let top = 5;
        for (i, (text, hint)) in rows.iter().enumerate() {
            let y = top + i as u16 * 2;
            fb.put_str_centered(y, text, value_style);
            let hint_x = fb.width() / 2 + 14;
            fb.put_str(hint_x, y, &format!("[{hint}]"), hint_style);
        }

        fb.put_str_centered(
            fb.height().saturating_sub(3),
            "Press ENTER to start, ESC to return",
            CellStyle::colors(Rgb::new(235, 235, 240), bg),
        );
    }

    fn draw_playing(&self, fb: &mut FrameBuffer, snapshot: &FrameSnapshot, theme: &Theme) {
        let grid_w = snapshot.config.grid_width as u16;
        let grid_h = snapshot.config.grid_height as u16;
        let board_w = grid_w * self.cell_w;
        let board_h = grid_h * self.cell_h;
        let frame_w = board_w + 2;
        let frame_h = board_h + 2;

        let start_x = fb.width().saturating_sub(frame_w) / 2;
        let start_y = fb.height().saturating_sub(frame_h) / 2;
        let origin_x = start_x + 1;
        let origin_y = start_y + 1;

        let field_bg = theme.background_top.scale(0.55);
        fb.fill_rect(
            origin_x,
            origin_y,
            board_w,
            board_h,
            ' ',
            CellStyle::colors(field_bg, field_bg),
        );
        self.draw_border(
            fb,
            start_x,
            start_y,
            frame_w,
            frame_h,
            CellStyle::colors(theme.accent, theme.background_top),
        );

        // Food, with a phase-driven pulse toward white.
        if let Some(food) = snapshot.food {
            let pulse = 1.0 - (self.phase * 2.0 - 1.0).abs();
            let color = theme.food.lerp(Rgb::new(255, 255, 255), pulse * 0.35);
            let px = origin_x + food.x as u16 * self.cell_w;
            let py = origin_y + food.y as u16 * self.cell_h;
            fb.fill_rect(
                px,
                py,
                self.cell_w,
                self.cell_h,
                '●',
                CellStyle::colors(color, field_bg).bold(),
            );
        }

        // Snake, tail first so the head stays on top while growing.
        let count = snapshot.segments.len();
        for (i, segment) in snapshot.segments.iter().enumerate().rev() {
            let prev = snapshot.prev_segments.get(i).copied().unwrap_or(*segment);
            let fx = prev.x as f32 + (segment.x - prev.x) as f32 * snapshot.progress;
            let fy = prev.y as f32 + (segment.y - prev.y) as f32 * snapshot.progress;
            let px = origin_x as f32 + fx * self.cell_w as f32;
            let py = origin_y as f32 + fy * self.cell_h as f32;
            if px < 0.0 || py < 0.0 {
                continue;
            }

            let shade = i as f32 / (count.saturating_sub(1)).max(1) as f32;
            let color = if i == 0 {
                theme.snake_head
            } else {
                theme.snake_body.lerp(theme.snake_head, shade)
            };
            fb.fill_rect(
                px.round() as u16,
                py.round() as u16,
                self.cell_w,
                self.cell_h,
                '█',
                CellStyle::colors(color, field_bg),
            );
        }

        // HUD.
        let hud_bg = theme.background_top;
        fb.put_str(
            2,
            1,
            &format!("Score: {}", snapshot.score),
            CellStyle::colors(Rgb::new(245, 245, 245), hud_bg).bold(),
        );
        fb.put_str(
            2,
            2,
            &format!("Best: {}", snapshot.high_score),
            CellStyle::colors(Rgb::new(225, 225, 230), hud_bg).dim(),
        );
    }

    fn draw_game_over(&self, fb: &mut FrameBuffer, snapshot: &FrameSnapshot, theme: &Theme) {
        let mid = fb.height() / 2;
        let band = CellStyle::colors(Rgb::new(245, 245, 248), Rgb::new(9, 9, 14));
        for y in mid.saturating_sub(2)..=mid + 2 {
            fb.fill_row(y, Rgb::new(9, 9, 14));
        }
        fb.put_str_centered(
            mid.saturating_sub(1),
            "G A M E   O V E R",
            CellStyle::colors(theme.accent, Rgb::new(9, 9, 14)).bold(),
        );
        fb.put_str_centered(mid, &format!("Score: {}", snapshot.score), band);
        fb.put_str_centered(
            mid + 1,
            "Press ENTER to try again or ESC for menu",
            band.dim(),
        );
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }
}
