//! Game state machine - menu, settings, playing and game-over screens
//!
//! Owns the configuration, the snake, the food, the score and the step
//! clock; the host loop threads events and frame deltas through it and
//! renders from the snapshot it fills. All state transitions are total:
//! invalid input is clamped or ignored, never surfaced as an error.

use arrayvec::ArrayVec;

use crate::core::{Config, Food, FrameSnapshot, SimpleRng, Snake, StepClock};
use crate::types::{
    Direction, Flow, InputEvent, Key, MenuAction, Rect, Screen, SoundCue, FOOD_SCORE, THEME_COUNT,
};

/// Sound cues emitted by one frame's worth of ticks
pub type CueBatch = ArrayVec<SoundCue, 4>;

/// One clickable menu entry
#[derive(Debug, Clone, Copy)]
pub struct MenuButton {
    pub action: MenuAction,
    pub rect: Rect,
}

/// Menu button layout for a terminal viewport, shared by the renderer and
/// mouse hit-testing so clicks always match what is drawn.
pub fn menu_layout(viewport: (u16, u16)) -> [MenuButton; 3] {
    let (width, height) = viewport;
    let button_w = 24u16.min(width);
    let button_h = 3u16;
    let x = width.saturating_sub(button_w) / 2;
    let top = height / 2;

    let mut index = 0u16;
    [MenuAction::Start, MenuAction::Settings, MenuAction::Quit].map(|action| {
        let rect = Rect::new(x, top + index * (button_h + 1), button_w, button_h);
        index += 1;
        MenuButton { action, rect }
    })
}

#[derive(Debug, Clone)]
pub struct Game {
    config: Config,
    screen: Screen,
    snake: Option<Snake>,
    food: Option<Food>,
    clock: StepClock,
    rng: SimpleRng,
    score: u32,
    high_score: u32,
    viewport: (u16, u16),
}

impl Game {
    pub fn new(seed: u32) -> Self {
        let config = Config::default();
        Self {
            clock: StepClock::new(config.move_speed),
            config,
            screen: Screen::Menu,
            snake: None,
            food: None,
            rng: SimpleRng::new(seed),
            score: 0,
            high_score: 0,
            viewport: (80, 24),
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn snake(&self) -> Option<&Snake> {
        self.snake.as_ref()
    }

    pub fn food(&self) -> Option<&Food> {
        self.food.as_ref()
    }

    pub fn set_viewport(&mut self, width: u16, height: u16) {
        self.viewport = (width, height);
    }

    /// Begin a fresh Playing session.
    ///
    /// Clamps the configuration, rebuilds snake and food, resets score and
    /// restarts the step clock at the configured speed.
    pub fn start_game(&mut self) {
        self.config.clamp();
        let snake = Snake::new(self.config.grid_width, self.config.grid_height);
        let mut food = Food::new();
        food.reposition(
            self.config.grid_width,
            self.config.grid_height,
            snake.segments(),
            &mut self.rng,
        );
        self.snake = Some(snake);
        self.food = Some(food);
        self.score = 0;
        self.clock = StepClock::new(self.config.move_speed);
        self.screen = Screen::Playing;
    }

    fn show_menu(&mut self) {
        self.screen = Screen::Menu;
    }

    fn show_game_over(&mut self) {
        self.high_score = self.high_score.max(self.score);
        self.screen = Screen::GameOver;
    }

    /// Dispatch one input event to the active screen's handler.
    pub fn handle_event(&mut self, event: InputEvent) -> Flow {
        match event {
            InputEvent::Quit => Flow::Quit,
            InputEvent::Resize(width, height) => {
                self.set_viewport(width, height);
                Flow::Continue
            }
            InputEvent::Key(key) => match self.screen {
                Screen::Menu => self.menu_key(key),
                Screen::Settings => self.settings_key(key),
                Screen::Playing => self.playing_key(key),
                Screen::GameOver => self.game_over_key(key),
            },
            InputEvent::MouseDown { x, y } => self.mouse_down(x, y),
        }
    }

    fn menu_key(&mut self, key: Key) -> Flow {
        match key {
            Key::Enter | Key::Space => self.start_game(),
            Key::Esc => return Flow::Quit,
            _ => {}
        }
        Flow::Continue
    }

    fn settings_key(&mut self, key: Key) -> Flow {
        match key {
            Key::LeftBracket | Key::Left => self.config.grid_width -= 1,
            Key::RightBracket | Key::Right => self.config.grid_width += 1,
            Key::Comma | Key::Down => self.config.grid_height -= 1,
            Key::Period | Key::Up => self.config.grid_height += 1,
            Key::Minus => self.config.move_speed -= 0.5,
            Key::Plus => self.config.move_speed += 0.5,
            Key::Char('s') => self.config.sound_enabled = !self.config.sound_enabled,
            Key::Char('t') => self.config.theme_index = (self.config.theme_index + 1) % THEME_COUNT,
            Key::Enter => {
                self.start_game();
                return Flow::Continue;
            }
            Key::Esc => {
                self.show_menu();
                return Flow::Continue;
            }
            _ => return Flow::Continue,
        }
        self.config.clamp();
        Flow::Continue
    }

    fn playing_key(&mut self, key: Key) -> Flow {
        if key == Key::Esc {
            // Session state is discarded; the next start rebuilds it.
            self.show_menu();
            return Flow::Continue;
        }

        let direction = match key {
            Key::Up | Key::Char('w') => Some(Direction::Up),
            Key::Down | Key::Char('s') => Some(Direction::Down),
            Key::Left | Key::Char('a') => Some(Direction::Left),
            Key::Right | Key::Char('d') => Some(Direction::Right),
            _ => None,
        };
        if let (Some(direction), Some(snake)) = (direction, self.snake.as_mut()) {
            snake.set_direction(direction);
        }
        Flow::Continue
    }

    fn game_over_key(&mut self, key: Key) -> Flow {
        match key {
            Key::Enter => self.start_game(),
            Key::Esc => self.show_menu(),
            _ => {}
        }
        Flow::Continue
    }

    fn mouse_down(&mut self, x: u16, y: u16) -> Flow {
        if self.screen != Screen::Menu {
            return Flow::Continue;
        }
        for button in menu_layout(self.viewport) {
            if button.rect.contains(x, y) {
                match button.action {
                    MenuAction::Start => self.start_game(),
                    MenuAction::Settings => self.screen = Screen::Settings,
                    MenuAction::Quit => return Flow::Quit,
                }
                break;
            }
        }
        Flow::Continue
    }

    /// Advance simulation time and run the resulting ticks.
    ///
    /// Returns the sound cues the frame produced, for the host to play.
    pub fn update(&mut self, dt: f32) -> CueBatch {
        let mut cues = CueBatch::new();
        if self.screen != Screen::Playing {
            return cues;
        }

        let ticks = self.clock.advance(dt);
        for _ in 0..ticks {
            if !self.step(&mut cues) {
                // Collision ends the session; drop the remaining ticks.
                break;
            }
        }
        cues
    }

    /// One grid step: move, then collision, then food pickup.
    fn step(&mut self, cues: &mut CueBatch) -> bool {
        let Some(snake) = self.snake.as_mut() else {
            return false;
        };

        snake.advance();
        if snake.collided() {
            let _ = cues.try_push(SoundCue::Bump);
            self.show_game_over();
            return false;
        }

        let Some(food) = self.food.as_mut() else {
            return true;
        };
        if food.is_placed() && snake.head() == food.position() {
            self.score += FOOD_SCORE;
            snake.grow();
            food.reposition(
                self.config.grid_width,
                self.config.grid_height,
                snake.segments(),
                &mut self.rng,
            );
            let _ = cues.try_push(SoundCue::Eat);
        }
        true
    }

    /// Fill a reusable snapshot with everything the renderer needs.
    pub fn snapshot_into(&self, out: &mut FrameSnapshot) {
        out.screen = self.screen;
        out.config = self.config;
        out.progress = self.clock.progress();
        out.score = self.score;
        out.high_score = self.high_score;

        out.segments.clear();
        out.prev_segments.clear();
        if let Some(snake) = &self.snake {
            out.segments.extend_from_slice(snake.segments());
            out.prev_segments.extend_from_slice(snake.prev_segments());
        }

        out.food = self
            .food
            .as_ref()
            .filter(|food| food.is_placed())
            .map(|food| food.position());
    }

    pub fn snapshot(&self) -> FrameSnapshot {
        let mut snapshot = FrameSnapshot::default();
        self.snapshot_into(&mut snapshot);
        snapshot
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Point;

    fn playing_game() -> Game {
        let mut game = Game::new(12345);
        game.start_game();
        game
    }

    #[test]
    fn test_new_game_starts_in_menu() {
        let game = Game::new(1);
        assert_eq!(game.screen(), Screen::Menu);
        assert_eq!(game.score(), 0);
        assert_eq!(game.high_score(), 0);
        assert!(game.snake().is_none());
        assert!(game.food().is_none());
    }

    #[test]
    fn test_start_game_resets_session() {
        let mut game = playing_game();
        assert_eq!(game.screen(), Screen::Playing);
        let snake = game.snake().unwrap();
        assert_eq!(snake.len(), 3);
        let food = game.food().unwrap();
        assert!(food.is_placed());
        assert!(!snake.segments().contains(&food.position()));
    }

    #[test]
    fn test_menu_enter_and_space_start() {
        for key in [Key::Enter, Key::Space] {
            let mut game = Game::new(1);
            assert_eq!(game.handle_event(InputEvent::Key(key)), Flow::Continue);
            assert_eq!(game.screen(), Screen::Playing);
        }
    }

    #[test]
    fn test_menu_escape_quits() {
        let mut game = Game::new(1);
        assert_eq!(game.handle_event(InputEvent::Key(Key::Esc)), Flow::Quit);
    }

    #[test]
    fn test_settings_adjustments_are_clamped_each_change() {
        let mut game = Game::new(1);
        // Reach Settings via the menu button under the default viewport.
        let settings_rect = menu_layout((80, 24))[1].rect;
        let flow = game.handle_event(InputEvent::MouseDown {
            x: settings_rect.x,
            y: settings_rect.y,
        });
        assert_eq!(flow, Flow::Continue);
        assert_eq!(game.screen(), Screen::Settings);

        for _ in 0..100 {
            let _ = game.handle_event(InputEvent::Key(Key::RightBracket));
        }
        assert_eq!(game.config().grid_width, crate::types::MAX_GRID_WIDTH);

        for _ in 0..100 {
            let _ = game.handle_event(InputEvent::Key(Key::Minus));
        }
        assert_eq!(game.config().move_speed, crate::types::MIN_MOVE_SPEED);
    }

    #[test]
    fn test_settings_toggles_and_theme_cycle() {
        let mut game = Game::new(1);
        let settings_rect = menu_layout(game.viewport)[1].rect;
        let _ = game.handle_event(InputEvent::MouseDown {
            x: settings_rect.x + 1,
            y: settings_rect.y + 1,
        });
        assert_eq!(game.screen(), Screen::Settings);

        let sound_before = game.config().sound_enabled;
        let _ = game.handle_event(InputEvent::Key(Key::Char('s')));
        assert_eq!(game.config().sound_enabled, !sound_before);

        for expected in [1, 2, 0, 1] {
            let _ = game.handle_event(InputEvent::Key(Key::Char('t')));
            assert_eq!(game.config().theme_index, expected);
        }
    }

    #[test]
    fn test_settings_enter_starts_escape_returns_to_menu() {
        let mut game = Game::new(1);
        let settings_rect = menu_layout(game.viewport)[1].rect;
        let _ = game.handle_event(InputEvent::MouseDown {
            x: settings_rect.x,
            y: settings_rect.y,
        });

        let _ = game.handle_event(InputEvent::Key(Key::Esc));
        assert_eq!(game.screen(), Screen::Menu);

        let _ = game.handle_event(InputEvent::MouseDown {
            x: settings_rect.x,
            y: settings_rect.y,
        });
        let _ = game.handle_event(InputEvent::Key(Key::Enter));
        assert_eq!(game.screen(), Screen::Playing);
    }

    #[test]
    fn test_playing_escape_discards_session_to_menu() {
        let mut game = playing_game();
        let _ = game.handle_event(InputEvent::Key(Key::Esc));
        assert_eq!(game.screen(), Screen::Menu);
    }

    #[test]
    fn test_playing_arrows_and_wasd_steer() {
        let mut game = playing_game();
        let _ = game.handle_event(InputEvent::Key(Key::Left));
        assert_eq!(
            game.snake().unwrap().pending_direction(),
            Direction::Left
        );

        let _ = game.handle_event(InputEvent::Key(Key::Char('d')));
        assert_eq!(
            game.snake().unwrap().pending_direction(),
            Direction::Right
        );
    }

    #[test]
    fn test_update_outside_playing_is_inert() {
        let mut game = Game::new(1);
        let cues = game.update(10.0);
        assert!(cues.is_empty());
        assert_eq!(game.screen(), Screen::Menu);
    }

    #[test]
    fn test_update_moves_snake_once_per_interval() {
        let mut game = playing_game();
        let head = game.snake().unwrap().head();
        let interval = 1.0 / game.config().move_speed;

        let cues = game.update(interval * 0.5);
        assert!(cues.is_empty());
        assert_eq!(game.snake().unwrap().head(), head);

        let _ = game.update(interval * 0.6);
        assert_eq!(
            game.snake().unwrap().head(),
            Point::new(head.x, head.y - 1)
        );
    }

    #[test]
    fn test_collision_enters_game_over_and_updates_high_score() {
        let mut game = playing_game();
        game.score = 50;
        // Drive the snake straight up into the wall, draining cues per step
        // so incidental pickups cannot fill the batch.
        let mut cues = CueBatch::new();
        loop {
            cues.clear();
            if !game.step(&mut cues) {
                break;
            }
        }
        assert_eq!(game.screen(), Screen::GameOver);
        // Incidental pickups on the way may add to 50, never subtract.
        assert!(game.score() >= 50);
        assert_eq!(game.high_score(), game.score());
        assert_eq!(cues.last(), Some(&SoundCue::Bump));
    }

    #[test]
    fn test_high_score_is_monotonic() {
        let mut game = playing_game();
        game.score = 30;
        game.show_game_over();
        assert_eq!(game.high_score(), 30);

        let _ = game.handle_event(InputEvent::Key(Key::Enter));
        assert_eq!(game.screen(), Screen::Playing);
        assert_eq!(game.score(), 0);
        game.score = 10;
        game.show_game_over();
        assert_eq!(game.high_score(), 30);
    }

    #[test]
    fn test_game_over_enter_restarts() {
        let mut game = playing_game();
        game.show_game_over();
        let _ = game.handle_event(InputEvent::Key(Key::Enter));
        assert_eq!(game.screen(), Screen::Playing);
        assert_eq!(game.snake().unwrap().len(), 3);
    }

    #[test]
    fn test_pickup_scores_grows_and_repositions() {
        let mut game = playing_game();
        let head = game.snake().unwrap().head();
        // Plant the food directly in the snake's path.
        let target = Point::new(head.x, head.y - 1);
        game.food = Some(planted_food(target));

        let mut cues = CueBatch::new();
        assert!(game.step(&mut cues));
        assert_eq!(game.score(), FOOD_SCORE);
        assert_eq!(game.snake().unwrap().growth_pending(), 1);
        assert_eq!(cues.as_slice(), &[SoundCue::Eat]);

        let food_pos = game.food().unwrap().position();
        assert_ne!(food_pos, target);
        assert!(!game.snake().unwrap().segments().contains(&food_pos));
    }

    fn planted_food(at: Point) -> Food {
        let mut food = Food::new();
        let mut rng = SimpleRng::new(1);
        // Occupy every cell except the target so reposition must choose it.
        let mut occupied = Vec::new();
        for y in 0..30 {
            for x in 0..30 {
                if Point::new(x, y) != at {
                    occupied.push(Point::new(x, y));
                }
            }
        }
        food.reposition(30, 30, &occupied, &mut rng);
        food
    }

    #[test]
    fn test_menu_layout_matches_hit_test() {
        let viewport = (100, 40);
        let buttons = menu_layout(viewport);
        assert_eq!(buttons[0].action, MenuAction::Start);
        assert_eq!(buttons[1].action, MenuAction::Settings);
        assert_eq!(buttons[2].action, MenuAction::Quit);
        // Buttons are stacked without overlap.
        for pair in buttons.windows(2) {
            assert!(pair[0].rect.y + pair[0].rect.h <= pair[1].rect.y);
        }
    }

    #[test]
    fn test_menu_quit_button_quits() {
        let mut game = Game::new(1);
        let quit_rect = menu_layout(game.viewport)[2].rect;
        let flow = game.handle_event(InputEvent::MouseDown {
            x: quit_rect.x + quit_rect.w - 1,
            y: quit_rect.y + quit_rect.h - 1,
        });
        assert_eq!(flow, Flow::Quit);
    }

    #[test]
    fn test_clicks_outside_menu_buttons_are_ignored() {
        let mut game = Game::new(1);
        let flow = game.handle_event(InputEvent::MouseDown { x: 0, y: 0 });
        assert_eq!(flow, Flow::Continue);
        assert_eq!(game.screen(), Screen::Menu);
    }

    #[test]
    fn test_snapshot_reflects_session_state() {
        let mut game = playing_game();
        let snapshot = game.snapshot();
        assert_eq!(snapshot.screen, Screen::Playing);
        assert_eq!(snapshot.segments.len(), 3);
        assert_eq!(snapshot.prev_segments.len(), 3);
        assert!(snapshot.food.is_some());
        assert_eq!(snapshot.score, 0);

        let _ = game.handle_event(InputEvent::Key(Key::Esc));
        let menu_snapshot = game.snapshot();
        assert_eq!(menu_snapshot.screen, Screen::Menu);
    }

    #[test]
    fn test_snapshot_food_sentinel_maps_to_none() {
        let mut game = playing_game();
        game.food = Some(Food::new());
        let snapshot = game.snapshot();
        assert_eq!(snapshot.food, None);
    }
}
