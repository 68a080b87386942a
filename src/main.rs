use std::io;
use std::thread;
use std::time::{Duration, Instant};

use arcade_snake::config::{
    DEFAULT_GRID_HEIGHT, DEFAULT_GRID_WIDTH, FRAME_INTERVAL, GridSize, MAX_WALL_LENGTH,
    THEME_CLASSIC,
};
use arcade_snake::game::GameSession;
use arcade_snake::history::{History, HistoryEntry};
use arcade_snake::input::{self, Direction, GameInput};
use arcade_snake::renderer;
use arcade_snake::score::{self, BestRecord};
use arcade_snake::terminal_runtime::{TerminalSession, install_panic_hook};
use arcade_snake::ui::menu::{MENU_OPTIONS, render_game_over, render_history, render_main_menu};
use clap::Parser;

#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Grid width in cells.
    #[arg(long, default_value_t = DEFAULT_GRID_WIDTH)]
    width: u16,

    /// Grid height in cells.
    #[arg(long, default_value_t = DEFAULT_GRID_HEIGHT)]
    height: u16,

    /// Fixed random seed for reproducible sessions.
    #[arg(long)]
    seed: Option<u64>,
}

/// Top-level navigation state of the shell.
enum Screen {
    Menu {
        selected: usize,
    },
    Playing {
        session: GameSession,
        started: Instant,
    },
    History,
    GameOver {
        score: u32,
        level: u32,
        new_best: bool,
    },
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();

    let min_dimension = MAX_WALL_LENGTH + 4;
    if cli.width < min_dimension || cli.height < min_dimension {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("grid must be at least {min_dimension}x{min_dimension} cells"),
        ));
    }

    let mut history = match History::load() {
        Ok(history) => history,
        Err(error) => {
            eprintln!("Failed to load history: {error}");
            History::new()
        }
    };
    let mut best = match score::load_best() {
        Ok(best) => best,
        Err(error) => {
            eprintln!("Failed to load best score: {error}");
            BestRecord::default()
        }
    };

    install_panic_hook();

    run(&cli, &mut history, &mut best)
}

fn run(cli: &Cli, history: &mut History, best: &mut BestRecord) -> io::Result<()> {
    let bounds = GridSize {
        width: cli.width,
        height: cli.height,
    };
    let mut terminal_session = TerminalSession::enter()?;
    let mut screen = Screen::Menu { selected: 0 };

    loop {
        let frame_start = Instant::now();

        terminal_session.terminal_mut().draw(|frame| {
            let theme = &THEME_CLASSIC;
            let area = frame.area();
            match &screen {
                Screen::Menu { selected } => render_main_menu(frame, area, *selected, best, theme),
                Screen::Playing { session, .. } => {
                    renderer::render(frame, session, theme, best.score);
                }
                Screen::History => render_history(frame, area, history, theme),
                Screen::GameOver {
                    score,
                    level,
                    new_best,
                } => render_game_over(frame, area, *score, *level, *new_best, theme),
            }
        })?;

        if let Some(game_input) = input::poll_input(Duration::ZERO)? {
            if matches!(game_input, GameInput::Quit) {
                break;
            }

            match handle_input(screen, game_input, bounds, cli.seed)? {
                Some(next) => screen = next,
                None => break,
            }
        }

        let mut next_screen = None;
        if let Screen::Playing { session, started } = &mut screen {
            session.tick(started.elapsed());

            if session.is_over() {
                let entry = HistoryEntry {
                    score: session.snake.score,
                    level: session.level,
                    elapsed_secs: started.elapsed().as_secs(),
                };
                history.push(entry);
                if let Err(error) = history.save() {
                    eprintln!("Failed to save history: {error}");
                }

                let new_best = best.update(entry.score, entry.level);
                if new_best {
                    if let Err(error) = score::save_best(*best) {
                        eprintln!("Failed to save best score: {error}");
                    }
                }

                next_screen = Some(Screen::GameOver {
                    score: entry.score,
                    level: entry.level,
                    new_best,
                });
            }
        }
        if let Some(next) = next_screen {
            screen = next;
        }

        let elapsed = frame_start.elapsed();
        if elapsed < FRAME_INTERVAL {
            thread::sleep(FRAME_INTERVAL - elapsed);
        }
    }

    Ok(())
}

/// Applies one input to the current screen; `None` means quit.
fn handle_input(
    screen: Screen,
    game_input: GameInput,
    bounds: GridSize,
    seed: Option<u64>,
) -> io::Result<Option<Screen>> {
    let next = match screen {
        Screen::Menu { selected } => match game_input {
            GameInput::Direction(Direction::Up) => Screen::Menu {
                selected: (selected + MENU_OPTIONS.len() - 1) % MENU_OPTIONS.len(),
            },
            GameInput::Direction(Direction::Down) => Screen::Menu {
                selected: (selected + 1) % MENU_OPTIONS.len(),
            },
            GameInput::Confirm => match selected {
                0 => Screen::Playing {
                    session: new_session(bounds, seed)?,
                    started: Instant::now(),
                },
                1 => Screen::History,
                _ => return Ok(None),
            },
            _ => Screen::Menu { selected },
        },

        Screen::Playing {
            mut session,
            started,
        } => match game_input {
            // Back to the menu discards the in-progress session.
            GameInput::Cancel => Screen::Menu { selected: 0 },
            other => {
                session.apply_input(other);
                Screen::Playing { session, started }
            }
        },

        Screen::History => match game_input {
            GameInput::Cancel | GameInput::Confirm => Screen::Menu { selected: 1 },
            _ => Screen::History,
        },

        Screen::GameOver {
            score,
            level,
            new_best,
        } => match game_input {
            GameInput::Cancel | GameInput::Confirm => Screen::Menu { selected: 0 },
            _ => Screen::GameOver {
                score,
                level,
                new_best,
            },
        },
    };

    Ok(Some(next))
}

fn new_session(bounds: GridSize, seed: Option<u64>) -> io::Result<GameSession> {
    let session = match seed {
        Some(seed) => GameSession::new_with_seed(bounds, seed),
        None => GameSession::new(bounds),
    };
    session.map_err(io::Error::other)
}
