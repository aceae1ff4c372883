//! lingame - line-oriented front-end for the matrix drills.
//!
//! Reads commands from stdin and prints the game to stdout. Logs go to stderr,
//! filtered by `RUST_LOG` (default `warn`). A TOML config file can be named
//! with `LINGAME_CONFIG`.
//!
//! ```text
//! menu:     1 | 2 | 3 [n]      pick a level, optionally with its size
//!           size n             size for the picked level
//! level 1:  enter              type the transpose, one row per line, blank line ends
//! level 2+: swap i j | scale i f | add s t f
//!           finish             check the current matrices
//! any:      show | answer | exit | reset | help | quit
//! ```

use anyhow::{Context, Result};
use lingame::algorithm::MatrixSource;
use lingame::config::GameConfig;
use lingame::error::Error;
use lingame::game::{Attempt, CommandKind, Level, LevelController, LevelState};
use lingame::matrix::parse_matrix;
use std::io::{self, BufRead, Write};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const CONFIG_ENV: &str = "LINGAME_CONFIG";

const HELP: &str = "\
Commands:
  1 | 2 | 3 [n]   pick a level (optionally with size n)
  size n          choose the size of the picked level
  enter           type a matrix, one row per line, finish with a blank line
  swap i j        swap rows i and j
  scale i f       multiply row i by f
  add s t f       add f times row s to row t
  finish          check the current matrices
  show            print the current matrices
  answer          show the expected answer
  exit            back to the menu, keeping progress
  reset           back to the menu, clearing progress
  quit            leave the game";

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("warn"))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(env_filter)
        .init();
}

fn load_config() -> Result<GameConfig> {
    match std::env::var_os(CONFIG_ENV) {
        Some(path) => GameConfig::load(&path)
            .with_context(|| format!("{CONFIG_ENV} points at an unusable config file")),
        None => Ok(GameConfig::default()),
    }
}

enum Flow {
    Continue,
    Quit,
}

struct Shell<R, W, S> {
    controller: LevelController<S>,
    state: LevelState,
    picked: Option<Level>,
    input: io::Lines<R>,
    out: W,
}

impl<R: BufRead, W: Write, S: MatrixSource> Shell<R, W, S> {
    fn new(controller: LevelController<S>, input: R, out: W) -> Self {
        let state = controller.new_session();
        Self {
            controller,
            state,
            picked: None,
            input: input.lines(),
            out,
        }
    }

    fn run(&mut self) -> Result<()> {
        writeln!(self.out, "{}\n\nType 'help' for commands.", self.state.render())?;
        while let Some(line) = self.input.next() {
            let line = line.context("failed to read from stdin")?;
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let (command, args) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
            if let Flow::Quit = self.dispatch(command, args.trim())? {
                break;
            }
            self.out.flush()?;
        }
        Ok(())
    }

    fn dispatch(&mut self, command: &str, args: &str) -> Result<Flow> {
        let outcome = match command {
            "1" => self.pick(Level::Transpose, args),
            "2" => self.pick(Level::GaussJordan, args),
            "3" => self.pick(Level::Inverse, args),
            "size" => self.size(args),
            "swap" => self.row_command(CommandKind::Swap, args),
            "scale" => self.row_command(CommandKind::Scale, args),
            "add" => self.row_command(CommandKind::AddScaled, args),
            "enter" => self.enter_matrix()?,
            "finish" => self.finish(),
            "answer" => self.answer(),
            "show" => Ok(self.state.render()),
            "exit" => {
                self.picked = None;
                self.state = self.controller.exit(&self.state);
                Ok(self.state.render())
            }
            "reset" => {
                self.picked = None;
                self.state = self.controller.reset_progress(&self.state);
                Ok(self.state.render())
            }
            "help" => Ok(HELP.to_string()),
            "quit" => return Ok(Flow::Quit),
            other => Ok(format!("Unknown command '{other}'. Type 'help' for commands.")),
        };

        match outcome {
            Ok(text) => writeln!(self.out, "{text}")?,
            Err(e) => writeln!(self.out, "Error: {e}")?,
        }
        Ok(Flow::Continue)
    }

    fn pick(&mut self, level: Level, args: &str) -> lingame::error::Result<String> {
        if !self.state.can_enter(level) {
            return Err(Error::LevelLocked {
                level,
                required: level.required_progress(),
            });
        }
        self.picked = Some(level);
        if args.is_empty() {
            let config = self.controller.config();
            return Ok(format!(
                "{level}: choose a size with 'size n' ({}-{})",
                config.min_size, config.max_size
            ));
        }
        self.size(args)
    }

    fn size(&mut self, args: &str) -> lingame::error::Result<String> {
        let Some(level) = self.picked else {
            return Ok("Pick a level first: 1, 2 or 3".to_string());
        };
        let n: usize = args
            .parse()
            .map_err(|_| Error::malformed(args, "size must be a whole number"))?;
        self.state = self.controller.enter_level(&self.state, level, n)?;
        self.picked = None;
        Ok(format!("{level}\n{}", self.state.render()))
    }

    fn row_command(&mut self, kind: CommandKind, args: &str) -> lingame::error::Result<String> {
        self.state = self.controller.apply_command(&self.state, kind, args)?;
        Ok(self.state.render())
    }

    fn enter_matrix(&mut self) -> Result<lingame::error::Result<String>> {
        let Some(n) = self
            .state
            .current_matrix()
            .filter(|_| self.state.active_level() == Some(Level::Transpose))
            .map(|m| m.rows())
        else {
            return Ok(Ok("'enter' is only used in level 1".to_string()));
        };

        writeln!(self.out, "Type {n} rows, then a blank line:")?;
        self.out.flush()?;
        let mut text = String::new();
        for line in self.input.by_ref() {
            let line = line.context("failed to read from stdin")?;
            if line.trim().is_empty() {
                break;
            }
            text.push_str(&line);
            text.push('\n');
        }

        Ok(parse_matrix(&text, n)
            .and_then(|answer| self.controller.check_transpose(&self.state, &answer))
            .map(|attempt| self.settle(attempt)))
    }

    fn finish(&mut self) -> lingame::error::Result<String> {
        let attempt = match self.state.active_level() {
            Some(Level::GaussJordan) => self.controller.finish_gauss_jordan(&self.state)?,
            Some(Level::Inverse) => self.controller.finish_inverse(&self.state)?,
            Some(Level::Transpose) => return Ok("Use 'enter' to type the transpose".to_string()),
            None => return Ok("No level is active".to_string()),
        };
        Ok(self.settle(attempt))
    }

    fn answer(&self) -> lingame::error::Result<String> {
        match self.state.active_level() {
            Some(Level::Transpose) => Ok(self.controller.reveal_transpose(&self.state)?.to_string()),
            Some(Level::Inverse) => Ok(self.controller.reveal_inverse(&self.state)?.to_string()),
            Some(Level::GaussJordan) => {
                Ok("Reduce the left block until every pivot is 1 and alone in its column".to_string())
            }
            None => Ok("No level is active".to_string()),
        }
    }

    fn settle(&mut self, attempt: Attempt) -> String {
        let message = attempt.message();
        let passed = attempt.passed();
        self.state = attempt.state;
        if passed {
            format!("{message}\n\n{}", self.state.render())
        } else {
            message
        }
    }
}

fn main() -> Result<()> {
    init_tracing();
    let config = load_config()?;
    let controller = LevelController::new(config).context("failed to set up the game")?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    Shell::new(controller, stdin.lock(), stdout.lock()).run()
}
