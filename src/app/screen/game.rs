use ggez::graphics::{Canvas, Rect, TextLayout};
use ggez::input::keyboard::KeyCode;
use ggez::Context;
use itertools::Itertools;
use rand::rngs::ThreadRng;
use rand::Rng;
use tracing::{error, info};

use super::{draw_text, DIM_TEXT, GOLD, MENU_BACKGROUND, TEXT};
use crate::app::control::{Control, State};
use crate::app::{board_origin, Command, ScreenKind, Services, View, HUD_HEIGHT, MARGIN};
use crate::basic::{Cell, Dir, GridDim, GridGeometry, Point};
use crate::color::Color;
use crate::config::Settings;
use crate::error::Result;
use crate::rendering::surface::{MeshSurface, Paint, Surface};
use crate::rendering::{draw_food, draw_grid, draw_snake};
use crate::snake::{Advance, Millis, Snake};
use crate::snake_control::{InputMapper, Intent};
use crate::support::text_layout::TextLayoutExtension;

fn clock(ctx: &Context) -> Millis {
    ctx.time.time_since_start().as_millis() as Millis
}

/// One run on the board, everything but input and drawing
pub struct Run {
    snake: Snake,
    food: Option<Cell>,
    grid: GridGeometry,
    control: Control,
    /// Set once when the run ends
    earned: Option<u32>,
    won: bool,
}

impl Run {
    pub fn new(settings: &Settings, now: Millis, rng: &mut impl Rng) -> Result<Self> {
        let dim = GridDim { cols: settings.cols, rows: settings.rows };
        let snake = Snake::builder()
            .centered(dim)
            .dir(Dir::R)
            .speed(settings.speed)
            .allow_cross_self(settings.allow_cross_self)
            .build()?;
        Ok(Self::from_snake(snake, settings.geometry(), now, rng))
    }

    fn from_snake(mut snake: Snake, grid: GridGeometry, now: Millis, rng: &mut impl Rng) -> Self {
        snake.rebase(now);
        let mut run = Self {
            snake,
            food: None,
            grid,
            control: Control::new(),
            earned: None,
            won: false,
        };
        run.food = run.free_cell(rng);
        run
    }

    fn free_cell(&self, rng: &mut impl Rng) -> Option<Cell> {
        // a snake crossing itself lists some cells twice
        let occupied = self.snake.cells().iter().copied().unique().collect_vec();
        self.grid.random_free_cell(&occupied, rng)
    }

    pub fn state(&self) -> State {
        self.control.state()
    }

    pub fn score(&self) -> u32 {
        self.snake.score()
    }

    pub fn turn(&mut self, dir: Dir) {
        if self.control.is_running() {
            self.snake.queue_dir(dir);
        }
    }

    pub fn toggle_pause(&mut self, now: Millis) {
        if let Some(paused_for) = self.control.toggle_pause(now) {
            self.snake.rebase(paused_for);
        }
    }

    /// Advances the snake and feeds it, returns the coins earned when
    /// the run ends during this step
    pub fn step(&mut self, now: Millis, settings: &Settings, rng: &mut impl Rng) -> Option<u32> {
        if !self.control.is_running() {
            return None;
        }
        let ticks = self.snake.ticks();
        match self.snake.advance(now) {
            Advance::Dead => return self.finish(settings),
            Advance::Alive if self.snake.ticks() == ticks => return None,
            Advance::Alive => {}
        }

        if self.food != Some(self.snake.head()) {
            return None;
        }
        self.snake.grow(settings.food_points);
        self.food = if self.snake.length() >= self.snake.dim().num_cells() {
            None
        } else {
            self.free_cell(rng)
        };
        if self.food.is_none() {
            self.won = true;
            return self.finish(settings);
        }
        None
    }

    fn finish(&mut self, settings: &Settings) -> Option<u32> {
        if !self.control.die() || self.earned.is_some() {
            return None;
        }
        let coins = settings.coins_for(self.snake.score());
        self.earned = Some(coins);
        Some(coins)
    }
}

pub struct Game {
    run: Run,
    input: InputMapper,
    rng: ThreadRng,
    origin: Point,
}

impl Game {
    pub fn new(ctx: &mut Context, services: &mut Services) -> Result<Self> {
        let mut rng = rand::thread_rng();
        let run = Run::new(&services.settings, clock(ctx), &mut rng)?;
        services
            .audio
            .play_for(ctx, &services.catalog, services.profile.equipped());
        Ok(Self {
            run,
            input: InputMapper::default(),
            rng,
            origin: board_origin(&services.settings),
        })
    }

    fn draw_hud(&self, canvas: &mut Canvas, services: &Services) {
        let window = services.window();
        let y = HUD_HEIGHT / 2.;
        let skin = services.catalog.get_or_default(services.profile.equipped());
        draw_text(
            canvas,
            &format!("Score: {}", self.run.score()),
            Point { x: MARGIN, y },
            26.,
            TextLayout::center_left(),
            TEXT,
        );
        draw_text(canvas, &skin.name, Point { x: window.x / 2., y }, 22., TextLayout::center(), DIM_TEXT);
        draw_text(
            canvas,
            &format!("Coins: {}", services.profile.balance()),
            Point { x: window.x - MARGIN, y },
            26.,
            TextLayout::center_right(),
            GOLD,
        );
    }

    /// Dims the board and writes `lines` over it, the first one bigger
    fn draw_overlay(&self, ctx: &Context, canvas: &mut Canvas, services: &mut Services, lines: &[&str]) -> Result {
        let board = services.settings.geometry().board_size();
        let mut surface = MeshSurface::new(ctx, &mut services.images, self.origin);
        surface.rect(Rect::new(0., 0., board.x, board.y), 0., Paint::Fill, Color::BLACK.with_alpha(0.6));
        surface.finish(canvas)?;

        let center = self.origin + board / 2.;
        for (i, line) in lines.iter().enumerate() {
            let (size, color) = if i == 0 { (56., TEXT) } else { (26., DIM_TEXT) };
            let dest = center + Point { x: 0., y: (i as f32 - 0.5) * 48. };
            draw_text(canvas, line, dest, size, TextLayout::center(), color);
        }
        Ok(())
    }
}

impl View for Game {
    fn update(&mut self, ctx: &mut Context, services: &mut Services) -> Result<Command> {
        let now = clock(ctx);
        if let Some(coins) = self.run.step(now, &services.settings, &mut self.rng) {
            info!("run over with {} points, earned {} coins", self.run.score(), coins);
            services.profile.earn(coins);
        }
        Ok(Command::None)
    }

    fn draw(&mut self, ctx: &mut Context, services: &mut Services) -> Result {
        let now = clock(ctx);
        let grid = services.settings.geometry();
        let mut canvas = Canvas::from_frame(ctx, MENU_BACKGROUND.0);

        let mut surface = MeshSurface::new(ctx, &mut services.images, self.origin);
        draw_grid(&mut surface, &grid);
        if let Some(food) = self.run.food {
            draw_food(&mut surface, &grid, food, now);
        }
        draw_snake(
            &mut surface,
            &self.run.snake,
            &grid,
            &services.catalog,
            &mut services.sprites,
            services.profile.equipped(),
            now,
        );
        surface.finish(&mut canvas)?;
        self.draw_hud(&mut canvas, services);

        match self.run.state() {
            State::Running => {}
            State::Paused { .. } => self.draw_overlay(ctx, &mut canvas, services, &["Paused", "P to resume"])?,
            State::Dead => {
                let title = if self.run.won { "Board full!" } else { "Game over" };
                let summary = format!(
                    "Score {}   +{} coins",
                    self.run.score(),
                    self.run.earned.unwrap_or(0)
                );
                let lines = [title, summary.as_str(), "Space to play again, Esc for the menu"];
                self.draw_overlay(ctx, &mut canvas, services, &lines)?;
            }
        }

        canvas.finish(ctx)?;
        Ok(())
    }

    fn key_down(&mut self, ctx: &mut Context, services: &mut Services, key: KeyCode, repeated: bool) -> Command {
        if key == KeyCode::Escape {
            return Command::Goto(ScreenKind::Menu);
        }
        if self.run.state() == State::Dead {
            if matches!(key, KeyCode::Space | KeyCode::Return) && !repeated {
                match Run::new(&services.settings, clock(ctx), &mut self.rng) {
                    Ok(run) => self.run = run,
                    Err(e) => {
                        error!("could not restart: {}", e);
                        return Command::Goto(ScreenKind::Menu);
                    }
                }
            }
            return Command::None;
        }
        match self.input.map(key) {
            Some(Intent::Turn(dir)) => self.run.turn(dir),
            Some(Intent::TogglePause) if !repeated => self.run.toggle_pause(clock(ctx)),
            _ => {}
        }
        Command::None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn settings() -> Settings {
        Settings {
            cols: 4,
            rows: 4,
            speed: 10,
            ..Settings::default()
        }
    }

    fn run(cells: &[(i32, i32)], dir: Dir, food: (i32, i32)) -> Run {
        let settings = settings();
        let snake = Snake::builder()
            .cells(cells.iter().map(|&(c, r)| Cell::new(c, r)).collect())
            .dir(dir)
            .speed(settings.speed)
            .dim(GridDim { cols: 4, rows: 4 })
            .build()
            .unwrap();
        let mut run = Run::from_snake(snake, settings.geometry(), 0, &mut StdRng::seed_from_u64(1));
        run.food = Some(Cell::new(food.0, food.1));
        run
    }

    #[test]
    fn test_new_run() {
        let mut rng = StdRng::seed_from_u64(9);
        let run = Run::new(&Settings::default(), 5000, &mut rng).unwrap();
        assert_eq!(run.snake.cells().len(), 1);
        assert_eq!(run.snake.head(), Cell::new(20, 15));
        assert_eq!(run.snake.dir(), Dir::R);
        assert_eq!(run.snake.last_tick(), 5000);
        assert_ne!(run.food, Some(run.snake.head()));
        assert!(run.food.is_some());
        assert_eq!(run.state(), State::Running);
    }

    #[test]
    fn test_eating_grows_and_moves_food() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut run = run(&[(1, 1)], Dir::R, (2, 1));
        assert_eq!(run.step(50, &settings(), &mut rng), None);
        assert_eq!(run.snake.head(), Cell::new(1, 1));

        assert_eq!(run.step(100, &settings(), &mut rng), None);
        assert_eq!(run.score(), 10);
        assert_eq!(run.snake.length(), 2);
        let food = run.food.unwrap();
        assert!(!run.snake.contains(food));
    }

    #[test]
    fn test_pause_freezes_ticks() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut run = run(&[(0, 0)], Dir::R, (3, 3));
        run.step(100, &settings(), &mut rng);
        assert_eq!(run.snake.ticks(), 1);

        run.toggle_pause(150);
        run.step(900, &settings(), &mut rng);
        assert_eq!(run.snake.ticks(), 1);
        // turning is ignored while paused
        run.turn(Dir::D);
        run.toggle_pause(1000);
        assert_eq!(run.state(), State::Running);

        // the 850 ms pause does not count towards the next tick
        run.step(1000, &settings(), &mut rng);
        assert_eq!(run.snake.ticks(), 1);
        run.step(1050, &settings(), &mut rng);
        assert_eq!(run.snake.ticks(), 2);
        assert_eq!(run.snake.head(), Cell::new(2, 0));
    }

    #[test]
    fn test_death_awards_coins_once() {
        let mut rng = StdRng::seed_from_u64(4);
        let mut run = run(&[(1, 1), (2, 1), (2, 2), (1, 2), (0, 2)], Dir::L, (3, 3));
        run.snake.grow(30);
        run.turn(Dir::D);
        assert_eq!(run.step(100, &settings(), &mut rng), Some(3));
        assert_eq!(run.state(), State::Dead);
        assert!(!run.won);
        assert_eq!(run.step(200, &settings(), &mut rng), None);
        assert_eq!(run.earned, Some(3));
    }

    #[test]
    fn test_full_board_is_a_win() {
        let mut rng = StdRng::seed_from_u64(5);
        let cells = [
            (2, 3), (1, 3), (0, 3), (0, 2), (1, 2), (2, 2), (3, 2), (3, 1),
            (2, 1), (1, 1), (0, 1), (0, 0), (1, 0), (2, 0), (3, 0),
        ];
        let mut run = run(&cells, Dir::R, (3, 3));
        assert_eq!(run.step(100, &settings(), &mut rng), Some(1));
        assert!(run.won);
        assert_eq!(run.food, None);
        assert_eq!(run.state(), State::Dead);
    }
}
