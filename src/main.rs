//! Terminal snake runner (default binary).
//!
//! Hosts the frame loop: poll a bounded batch of input events, advance the
//! simulation by the elapsed wall-clock time, render the snapshot, then
//! sleep out the frame interval (waking early on input).

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::{event, terminal};

use tui_snake::audio::Audio;
use tui_snake::core::{FrameSnapshot, Game};
use tui_snake::input::map_event;
use tui_snake::term::{FrameBuffer, GameView, TerminalRenderer};
use tui_snake::types::{Flow, InputEvent, FRAME_MS, MAX_EVENTS_PER_FRAME};

fn main() -> Result<()> {
    // Probe audio before raw mode so a one-time failure note stays readable.
    let mut audio = Audio::new();

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut audio);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn session_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u32)
        .unwrap_or(1)
}

fn run(term: &mut TerminalRenderer, audio: &mut Audio) -> Result<()> {
    let mut game = Game::new(session_seed());
    let mut view = GameView::default();
    let mut snapshot = FrameSnapshot::default();

    let (width, height) = terminal::size().unwrap_or((80, 24));
    game.set_viewport(width, height);
    let mut fb = FrameBuffer::new(width, height);

    let frame = Duration::from_millis(FRAME_MS);
    let mut last = Instant::now();

    loop {
        let frame_start = Instant::now();
        let dt = frame_start.duration_since(last).as_secs_f32();
        last = frame_start;

        // Input: drain a bounded batch without blocking.
        let mut budget = MAX_EVENTS_PER_FRAME;
        while budget > 0 && event::poll(Duration::ZERO)? {
            budget -= 1;
            let Some(input) = map_event(event::read()?) else {
                continue;
            };
            if let InputEvent::Resize(..) = input {
                term.invalidate();
            }
            if game.handle_event(input) == Flow::Quit {
                return Ok(());
            }
        }

        // Simulation.
        audio.set_enabled(game.config().sound_enabled);
        for cue in game.update(dt) {
            audio.play(cue);
        }

        // Render.
        view.advance(dt);
        let (width, height) = terminal::size().unwrap_or((80, 24));
        game.set_viewport(width, height);
        fb.resize(width, height);
        game.snapshot_into(&mut snapshot);
        view.render_into(&mut fb, &snapshot);
        term.draw_swap(&mut fb)?;

        // Frame limiter; input arriving early wakes the loop sooner.
        if let Some(timeout) = frame.checked_sub(frame_start.elapsed()) {
            let _ = event::poll(timeout)?;
        }
    }
}
