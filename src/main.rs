use std::io::{self, BufRead, Write};

use anyhow::Context;
use clap::Parser;

use etch_grid::app::{SketchController, SketchSettings};
use etch_grid::config::{ConfigError, GridConfig};
use etch_grid::domain::Rgb;
use etch_grid::logging::{LoggingConfig, init_logging};
use etch_grid::ui::console::HELP;
use etch_grid::ui::{BoardRenderer, Command, RESET_PROMPT, parse_command, render_text};

/// Interactive etch-a-sketch board driven from the console
#[derive(Debug, Parser)]
#[command(name = "etch-grid", version)]
struct Cli {
    /// Cells per side of the first board (1-64)
    #[arg(long, default_value_t = GridConfig::DEFAULT_CELLS)]
    cells: u32,

    /// Pen colour as #rgb or #rrggbb
    #[arg(long, default_value = "#000")]
    pen_color: Rgb,

    /// Seed for rainbow colours (random when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Side of the saved PNG board in pixels
    #[arg(long, default_value_t = 550)]
    board_size: u32,

    /// Log filter in env_logger syntax, overrides RUST_LOG
    #[arg(long)]
    log_filter: Option<String>,
}

impl Cli {
    fn settings(&self) -> SketchSettings {
        SketchSettings {
            default_cells: self.cells,
            pen_color: self.pen_color,
            seed: self.seed,
            board_pixel_size: self.board_size,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(LoggingConfig {
        env_filter: cli.log_filter.clone(),
        ..LoggingConfig::default()
    });

    let mut session = SketchController::new(cli.settings()).context("cannot start session")?;
    log::info!("session started at {0}x{0}", session.cells_per_side());

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut out = io::stdout();
    let renderer = BoardRenderer::default();

    writeln!(out, "etch-grid {0}x{0} board; type `help` for commands", session.cells_per_side())?;
    loop {
        write!(out, "> ")?;
        out.flush()?;
        let Some(line) = lines.next() else { break };
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(e) => {
                writeln!(out, "{e}")?;
                continue;
            }
        };

        match command {
            Command::Reset(answer) => {
                let answer = match answer {
                    Some(answer) => answer,
                    None => {
                        writeln!(out, "{RESET_PROMPT}")?;
                        out.flush()?;
                        // EOF is a cancelled prompt
                        match lines.next() {
                            Some(answer) => answer?,
                            None => break,
                        }
                    }
                };
                match session.request_dimension_change(&answer) {
                    Ok(n) => writeln!(out, "new {n}x{n} board")?,
                    Err(ConfigError::NoOp { current }) => writeln!(out, "board cleared at {current}x{current}")?,
                    // Rejected sizes change nothing
                    Err(e) => log::warn!("{e}"),
                }
            }
            Command::Click(coords) => {
                session.cell_clicked(coords);
            }
            Command::Hover(coords) => {
                session.cell_hovered(coords);
            }
            Command::Stroke { from, to } => {
                if let Err(e) = session.stroke(from, to) {
                    writeln!(out, "{e}")?;
                }
            }
            Command::Rainbow => {
                let enabled = session.rainbow_button_clicked();
                writeln!(out, "rainbow {}", if enabled { "on" } else { "off" })?;
            }
            Command::Show => {
                let state = session.paint_state();
                write!(out, "{}", render_text(&session.board()))?;
                writeln!(out, "pen {:?}, mode {:?}", state.pen, state.mode)?;
            }
            Command::Save(path) => {
                let board_px = session.settings().board_pixel_size;
                let saved = renderer
                    .render_board(&session.board(), board_px, true)
                    .and_then(|pixmap| renderer.save_png(&pixmap, &path));
                match saved {
                    Ok(()) => writeln!(out, "saved {}", path.display())?,
                    Err(e) => writeln!(out, "{e}")?,
                }
            }
            Command::Help => writeln!(out, "{HELP}")?,
            Command::Quit => break,
        }
    }

    Ok(())
}
