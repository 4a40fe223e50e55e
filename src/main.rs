use crossterm::event::{self, Event};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use gridsnake::app::App;
use gridsnake::cli::{parse_args, CliCommand, USAGE};
use gridsnake::{build_info, input, logging, ui};
use log::{error, info};
use ratatui::backend::{Backend, CrosstermBackend};
use ratatui::Terminal;
use std::io;
use std::time::Instant;

fn main() -> io::Result<()> {
    let (config, verbose) = match parse_args(std::env::args().skip(1)) {
        Ok(CliCommand::Play { config, verbose }) => (config, verbose),
        Ok(CliCommand::Version) => {
            println!("{}", build_info::version_line());
            std::process::exit(0);
        }
        Ok(CliCommand::Help) => {
            println!("{}", USAGE);
            std::process::exit(0);
        }
        Err(message) => {
            eprintln!("{}", message);
            eprintln!("Run 'gridsnake --help' for usage.");
            std::process::exit(1);
        }
    };

    match logging::init_logging(verbose) {
        Ok(path) => info!("Logging to {}", path.display()),
        Err(e) => eprintln!("Warning: file logging disabled: {}", e),
    }
    info!("Starting {}", build_info::version_line());
    info!("Config: {:?}", config);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, App::new(config, Instant::now()));

    // Restore terminal even if the loop failed
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = &result {
        error!("Game loop failed: {}", e);
    }
    info!("Shutting down");
    result
}

/// Draw, wait for a key until the next tick is due, then tick.
fn run<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> io::Result<()> {
    loop {
        let snapshot = app.engine().snapshot();
        terminal.draw(|frame| ui::draw_ui(frame, &snapshot))?;

        if event::poll(app.poll_timeout(Instant::now()))? {
            if let Event::Key(key_event) = event::read()? {
                app.handle_input(input::map_key(key_event), Instant::now());
            }
        }

        if app.should_quit {
            return Ok(());
        }

        app.on_tick(Instant::now());
    }
}
