use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{stderr, Stderr};
use std::time::Duration;
use tokio::time::interval;

use crate::audio::{AudioPlayer, Cue};
use crate::game::{Direction, GameConfig, GameEngine, GameState, Phase};
use crate::input::{InputHandler, KeyAction};
use crate::metrics::SessionStats;
use crate::render::{Renderer, Skin};

/// Interactive play: owns the engine, the current round, and all the
/// presentation collaborators, and drives them from one select loop.
pub struct PlayMode {
    engine: GameEngine,
    state: GameState,
    stats: SessionStats,
    renderer: Renderer,
    input_handler: InputHandler,
    audio: AudioPlayer,
    should_quit: bool,
    pending_direction: Option<Direction>,
}

impl PlayMode {
    pub fn new(config: GameConfig, audio: AudioPlayer, skin: Skin) -> Self {
        let mut engine = GameEngine::new(config);
        let state = engine.reset();

        Self {
            engine,
            state,
            stats: SessionStats::new(),
            renderer: Renderer::new(skin),
            input_handler: InputHandler::new(),
            audio,
            should_quit: false,
            pending_direction: None,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        // Run game loop with cleanup
        let result = self.run_game_loop(&mut terminal).await;

        // Cleanup terminal
        self.cleanup_terminal(&mut terminal)?;

        result
    }

    async fn run_game_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();

        // Fixed-delay game tick, 200ms by default.
        let mut tick_timer = interval(self.engine.config().tick_interval());

        // Render at 30 FPS (33ms per frame)
        let mut render_timer = interval(Duration::from_millis(33));

        loop {
            tokio::select! {
                // Handle terminal events
                maybe_event = event_stream.next() => {
                    if let Some(Ok(event)) = maybe_event {
                        self.handle_event(event);
                    }
                }

                // Game logic tick
                _ = tick_timer.tick() => {
                    self.advance_round();
                }

                // Render frame
                _ = render_timer.tick() => {
                    self.stats.refresh();
                    terminal.draw(|frame| {
                        self.renderer.render(frame, &self.state, &self.stats);
                    }).context("Failed to draw frame")?;
                }

                // Handle Ctrl+C
                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    fn handle_event(&mut self, event: Event) {
        if let Event::Key(key) = event {
            // Only process key press events, not release
            if key.kind != KeyEventKind::Press {
                return;
            }

            match self.input_handler.handle_key_event(key) {
                KeyAction::Steer(direction) => {
                    // Steering is ignored while paused or between rounds.
                    if self.state.phase == Phase::Running {
                        self.pending_direction = Some(direction);
                    }
                }
                KeyAction::TogglePause => self.toggle_pause(),
                KeyAction::Resume => self.resume_or_restart(),
                KeyAction::Quit => self.should_quit = true,
                KeyAction::None => {}
            }
        }
    }

    fn toggle_pause(&mut self) {
        match self.state.phase {
            Phase::Running => {
                self.state.phase = Phase::Paused;
                self.audio.pause_music();
            }
            Phase::Paused => {
                self.state.phase = Phase::Running;
                self.audio.resume_music();
            }
            // Game over is acknowledged with Enter, not the pause key.
            Phase::GameOver => {}
        }
    }

    fn resume_or_restart(&mut self) {
        match self.state.phase {
            Phase::Paused => {
                self.state.phase = Phase::Running;
                self.audio.resume_music();
            }
            Phase::GameOver => self.start_round(),
            Phase::Running => {}
        }
    }

    fn advance_round(&mut self) {
        if self.state.phase != Phase::Running {
            return;
        }

        if let Some(direction) = self.pending_direction.take() {
            self.state.snake.change_direction(direction);
        }

        let outcome = self.engine.tick(&mut self.state);

        if outcome.ate_apple {
            self.audio.play(Cue::Eat);
        }

        if outcome.collision.is_some() {
            // Every cause gets the same cue; the distinction is cosmetic.
            self.audio.play(Cue::Crash);
            self.audio.pause_music();
            self.stats.on_round_over(self.state.score());
        }
    }

    fn start_round(&mut self) {
        self.state = self.engine.reset();
        self.stats.on_round_start();
        self.pending_direction = None;
        self.audio.resume_music();
    }

    fn cleanup_terminal(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mode() -> PlayMode {
        PlayMode::new(GameConfig::default(), AudioPlayer::disabled(), Skin::glyphs())
    }

    #[test]
    fn test_initial_round_is_running() {
        let mode = mode();
        assert_eq!(mode.state.phase, Phase::Running);
        assert_eq!(mode.state.score(), 1);
    }

    #[test]
    fn test_pause_toggle_round_trip() {
        let mut mode = mode();

        mode.toggle_pause();
        assert_eq!(mode.state.phase, Phase::Paused);

        mode.toggle_pause();
        assert_eq!(mode.state.phase, Phase::Running);
    }

    #[test]
    fn test_pause_toggle_ignored_after_game_over() {
        let mut mode = mode();
        mode.state.phase = Phase::GameOver;

        mode.toggle_pause();
        assert_eq!(mode.state.phase, Phase::GameOver);
    }

    #[test]
    fn test_resume_acknowledges_game_over_with_full_reset() {
        let mut mode = mode();
        mode.state.snake.grow();
        mode.state.snake.grow();
        mode.state.phase = Phase::GameOver;
        mode.pending_direction = Some(Direction::Left);

        mode.resume_or_restart();

        assert_eq!(mode.state.phase, Phase::Running);
        assert_eq!(mode.state.score(), 1);
        assert_eq!(mode.pending_direction, None);
    }

    #[test]
    fn test_resume_unpauses() {
        let mut mode = mode();
        mode.state.phase = Phase::Paused;

        mode.resume_or_restart();
        assert_eq!(mode.state.phase, Phase::Running);
    }

    #[test]
    fn test_paused_round_does_not_advance() {
        let mut mode = mode();
        mode.state.phase = Phase::Paused;
        let head_before = mode.state.snake.head();

        mode.advance_round();
        assert_eq!(mode.state.snake.head(), head_before);
    }

    #[test]
    fn test_pending_direction_applied_on_tick() {
        let mut mode = mode();
        mode.pending_direction = Some(Direction::Right);

        mode.advance_round();

        assert_eq!(mode.state.snake.direction, Direction::Right);
        assert_eq!(mode.pending_direction, None);
    }
}
