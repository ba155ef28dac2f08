//! Terminal maze runner (default binary).
//!
//! Starts on an un-generated grid; Enter carves a maze. Uses crossterm for
//! input and the framebuffer renderer from `tui_maze::term`.

use std::fs::File;
use std::io::{self, Write};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use env_logger::{Env, Target};
use log::info;

use tui_maze::input::{handle_key_event, should_quit};
use tui_maze::term::{FrameBuffer, MazeView, Raster, TerminalRenderer, Viewport};
use tui_maze::{Config, MazeApp};

fn main() -> Result<()> {
    let config = Config::parse();
    config.validate()?;
    init_logging(&config)?;

    let seed = config.resolve_seed();
    let mut app = MazeApp::from_config(&config, seed)?;

    if config.print {
        return print_once(&mut app, &config);
    }

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut app, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

/// Logs go to `--log-file` when given. Without one, the terminal UI runs with
/// logging off and `--print` logs to stderr.
fn init_logging(config: &Config) -> Result<()> {
    let (filter, target) = match (&config.log_file, config.print) {
        (Some(path), _) => {
            let file = File::create(path)
                .with_context(|| format!("create log file {}", path.display()))?;
            ("info", Target::Pipe(Box::new(file)))
        }
        (None, true) => ("warn", Target::Stderr),
        (None, false) => return Ok(()),
    };

    env_logger::Builder::from_env(Env::default().default_filter_or(filter))
        .target(target)
        .try_init()
        .context("install logger")?;
    Ok(())
}

fn print_once(app: &mut MazeApp, config: &Config) -> Result<()> {
    app.regenerate()?;
    app.finish()?;
    info!("printed maze seed {}", app.seed());

    let raster = Raster::from_snapshot(&app.snapshot(), config.path_width);
    let mut stdout = io::stdout().lock();
    stdout.write_all(raster.to_text().as_bytes())?;
    stdout.flush()?;
    Ok(())
}

fn run(term: &mut TerminalRenderer, app: &mut MazeApp, config: &Config) -> Result<()> {
    let view = MazeView::default().with_path_width(config.path_width);
    let frame = Duration::from_millis(config.frame_ms as u64);
    let mut fb = FrameBuffer::new(0, 0);

    if config.generate {
        app.regenerate()?;
    }

    let mut last_frame = Instant::now();
    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let status = app.status_view();
        view.render_into(&app.snapshot(), Some(&status), Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        // Input with timeout until next frame.
        let timeout = frame
            .checked_sub(last_frame.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        app.apply(action)?;
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        // Frame.
        if last_frame.elapsed() >= frame {
            last_frame = Instant::now();
            app.tick()?;
        }
    }
}
