mod constants;
mod fishing;
mod input;
mod save_manager;
mod ui;

use constants::{MESSAGE_LOG_CAPACITY, POLL_INTERVAL_MS};
use crossterm::event::{self, Event};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use fishing::generation::default_catalogue;
use fishing::logic::FishingSession;
use fishing::types::FrameInput;
use input::InputResult;
use ratatui::{backend::CrosstermBackend, Terminal};
use save_manager::SaveManager;
use std::io;
use std::time::{Duration, Instant};

fn main() -> io::Result<()> {
    // Restore the catch history before entering the terminal. A missing or
    // unreadable save is simply an empty history.
    let save_manager = SaveManager::new()?;
    let mut rng = rand::thread_rng();

    let mut session =
        match FishingSession::with_save(default_catalogue(), save_manager.load_or_default(), &mut rng)
        {
            Ok(session) => session,
            Err(e) => {
                eprintln!("Configuration error: {}", e);
                std::process::exit(1);
            }
        };

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut messages: Vec<String> = Vec::new();
    let mut last_frame = Instant::now();

    // Main loop
    loop {
        terminal.draw(|f| ui::draw_ui(f, &session, &messages))?;

        // Collect this frame's edge signals from pending key events
        let mut frame_input = FrameInput::default();
        let mut quit = false;
        if event::poll(Duration::from_millis(POLL_INTERVAL_MS))? {
            while event::poll(Duration::from_millis(0))? {
                if let Event::Key(key) = event::read()? {
                    if matches!(input::handle_key(key, &mut frame_input), InputResult::Quit) {
                        quit = true;
                    }
                }
            }
        }
        if quit {
            break;
        }

        let elapsed = last_frame.elapsed().as_secs_f64();
        last_frame = Instant::now();

        let result = session.advance(elapsed, frame_input, &mut rng);

        if let Some(fish) = &result.caught {
            push_message(
                &mut messages,
                format!("You caught a {}! +{} points", fish.name, fish.points),
            );
        }
        if result.escaped {
            push_message(&mut messages, "The fish got away...".to_string());
        }
        if result.stats_reset {
            push_message(&mut messages, "Catch history cleared".to_string());
        }

        // Persist after a catch or a reset. A failed write is reported in
        // the log and the loop carries on with in-memory state.
        if result.caught.is_some() || result.stats_reset {
            if let Err(e) = save_manager.save(&session.save_data()) {
                push_message(&mut messages, format!("Save failed: {}", e));
            }
        }
    }

    // Cleanup terminal
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;

    println!("Goodbye!");

    Ok(())
}

/// Appends to the recent-events log, dropping the oldest entry when full.
fn push_message(messages: &mut Vec<String>, message: String) {
    messages.push(message);
    if messages.len() > MESSAGE_LOG_CAPACITY {
        messages.remove(0);
    }
}
