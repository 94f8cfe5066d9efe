//! Dungeon layout viewer
//!
//! Generates a level and lets a steering agent chase a marker around it.

use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use clap::Parser;
use crossterm::{
    event, execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use wn_core::dungeon::{Level, LevelConfig, Point, generate_random, generate_seeded};
use wn_tui::App;
use wn_tui::glyphs::GlyphMode;

/// Procedural dungeon layout viewer
#[derive(Parser, Debug)]
#[command(name = "warren")]
#[command(author, version, about = "warren - generate and explore dungeon layouts", long_about = None)]
struct Args {
    /// Level width in cells
    #[arg(long, default_value_t = 100)]
    width: i32,

    /// Level height in cells
    #[arg(long, default_value_t = 80)]
    height: i32,

    /// Smallest room extent
    #[arg(long, default_value_t = 10)]
    room_min: i32,

    /// Largest room extent
    #[arg(long, default_value_t = 14)]
    room_max: i32,

    /// Maximum room placement attempts
    #[arg(short = 'n', long, default_value_t = 15)]
    max_rooms: u32,

    /// Fixed seed (omit for a fresh layout every run)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Load the level configuration from a JSON file instead of flags
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the layout to stdout and exit
    #[arg(long)]
    ascii: bool,

    /// Write the generated level as JSON to this path and exit
    #[arg(long)]
    export: Option<PathBuf>,

    /// Floor glyph style (classic or fancy)
    #[arg(long, default_value_t)]
    glyphs: GlyphMode,
}

fn main() -> io::Result<()> {
    let args = Args::parse();
    let config = load_config(&args)?;

    let generated = match args.seed {
        Some(seed) => generate_seeded(&config, seed),
        None => generate_random(&config),
    };
    let level = match generated {
        Ok(level) => level,
        Err(e) => {
            eprintln!("invalid configuration: {e}");
            std::process::exit(2);
        }
    };

    // One-shot modes skip the terminal entirely
    if args.ascii {
        print_ascii(&level, args.glyphs);
        return Ok(());
    }
    if let Some(path) = &args.export {
        export_level(&level, path)?;
        println!("wrote {}", path.display());
        return Ok(());
    }

    // Build the app before touching the terminal so errors stay readable
    let mut app = App::new(config, level, args.glyphs).map_err(io::Error::other)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Main loop
    let mut last_tick = Instant::now();
    loop {
        terminal.draw(|frame| app.render(frame))?;

        if event::poll(Duration::from_millis(33))? {
            app.handle_event(event::read()?);
        }

        let now = Instant::now();
        app.tick(now.duration_since(last_tick).as_secs_f32());
        last_tick = now;

        if app.should_quit() {
            break;
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(())
}

/// Resolve the level configuration from a JSON file or the size flags
fn load_config(args: &Args) -> io::Result<LevelConfig> {
    if let Some(path) = &args.config {
        let text = std::fs::read_to_string(path)?;
        serde_json::from_str(&text).map_err(io::Error::other)
    } else {
        Ok(LevelConfig {
            level_width: args.width,
            level_height: args.height,
            room_min: args.room_min,
            room_max: args.room_max,
            max_rooms: args.max_rooms,
        })
    }
}

/// Dump the layout to stdout, one row per line
fn print_ascii(level: &Level, glyphs: GlyphMode) {
    let floor = glyphs.floor_char();
    for y in 0..level.height() {
        let row: String = (0..level.width())
            .map(|x| {
                if level.is_floor(Point::new(x, y)) {
                    floor
                } else {
                    ' '
                }
            })
            .collect();
        println!("{}", row.trim_end());
    }
}

/// Write the level as pretty JSON with a stable cell order
fn export_level(level: &Level, path: &PathBuf) -> io::Result<()> {
    let doc = serde_json::json!({
        "width": level.width(),
        "height": level.height(),
        "seed": level.seed(),
        "rooms": level.rooms(),
        "floor": level.sorted_floor(),
    });
    let text = serde_json::to_string_pretty(&doc).map_err(io::Error::other)?;
    std::fs::write(path, text)
}
