use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::{Stream, StreamExt};
use log::{info, warn};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::io::{self, stderr, Stderr};
use tokio::time::{interval, MissedTickBehavior};

use crate::game::{GameConfig, GameState};
use crate::input::{InputHandler, KeyAction};
use crate::render::Renderer;

pub struct HumanMode {
    state: GameState,
    renderer: Renderer,
    input_handler: InputHandler,
}

impl HumanMode {
    pub fn new(config: GameConfig) -> Self {
        Self {
            state: GameState::new(config),
            renderer: Renderer::new(),
            input_handler: InputHandler::new(),
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
        let result = self
            .run_game_loop(&mut terminal, EventStream::new())
            .await;

        // Cleanup terminal
        self.cleanup_terminal(&mut terminal)?;

        result
    }

    async fn run_game_loop<S, B>(
        &mut self,
        terminal: &mut Terminal<B>,
        mut events: S,
    ) -> Result<()>
    where
        S: Stream<Item = io::Result<Event>> + Unpin,
        B: Backend,
    {
        let mut input_open = true;

        let tick_interval = self.state.config().tick_interval();
        let mut frame_clock = interval(tick_interval);
        frame_clock.set_missed_tick_behavior(MissedTickBehavior::Delay);

        info!(
            "game loop started, {}x{} grid at {} ticks/s",
            self.state.grid().cols(),
            self.state.grid().rows(),
            self.state.config().tick_rate
        );

        loop {
            tokio::select! {
                // Queued input always drains before the next frame
                biased;

                maybe_event = events.next(), if input_open => {
                    match maybe_event {
                        Some(Ok(event)) => self.handle_event(event),
                        Some(Err(err)) => {
                            return Err(err).context("Failed to read terminal event");
                        }
                        None => {
                            warn!("terminal event stream closed");
                            input_open = false;
                            self.state.quit();
                        }
                    }
                }

                // Handle Ctrl+C
                _ = tokio::signal::ctrl_c() => {
                    self.state.quit();
                }

                _ = frame_clock.tick() => {
                    self.frame(terminal)?;
                    if !self.state.is_running() {
                        break;
                    }
                }
            }
        }

        Ok(())
    }

    /// One frame: advance the simulation, then draw the result
    fn frame<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        self.state.tick();
        terminal
            .draw(|frame| {
                self.renderer.render(frame, &self.state);
            })
            .context("Failed to draw frame")?;
        Ok(())
    }

    fn handle_event(&mut self, event: Event) {
        let Event::Key(key) = event else {
            return;
        };

        // Only process key press events, not release
        if key.kind != KeyEventKind::Press {
            return;
        }

        match self.input_handler.handle_key_event(key) {
            KeyAction::Steer(direction) => {
                self.state.steer(direction);
            }
            KeyAction::Restart => {
                info!("manual restart at length {}", self.state.snake().len());
                self.state.reset();
            }
            KeyAction::Quit => {
                self.state.quit();
            }
            KeyAction::None => {}
        }
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
