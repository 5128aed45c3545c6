// src/orchestrator.rs
//! Orchestrates the main application flow: reads typed input, feeds moves to
//! the `GameSession`, turns the result into scenes with the `Renderer`, and
//! hands those to a `Presenter`. Input is an abstract reader and output a
//! trait object so the whole loop can be driven from tests.

use crate::{
    config::Config,
    engine::{GameSession, MoveOutcome},
    keys::{map_line, KeyAction},
    renderer::{Presenter, Renderer},
};
use anyhow::{Context, Result};
use std::io::BufRead;

/// Represents the status of the orchestrator after one input cycle.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum OrchestratorStatus {
    /// Keep reading input.
    Running,
    /// Quit requested, input exhausted, or the game is over.
    Shutdown,
}

/// Couples a game session with its renderer, input and presenter.
pub struct GameOrchestrator<'a> {
    session: &'a mut GameSession,
    renderer: Renderer,
    config: &'a Config,
    input: &'a mut dyn BufRead,
    presenter: &'a mut dyn Presenter,
}

impl<'a> GameOrchestrator<'a> {
    pub fn new(
        session: &'a mut GameSession,
        config: &'a Config,
        input: &'a mut dyn BufRead,
        presenter: &'a mut dyn Presenter,
    ) -> Self {
        GameOrchestrator {
            session,
            renderer: Renderer::new(config),
            config,
            input,
            presenter,
        }
    }

    /// Draws the current board at rest.
    pub fn show_board(&mut self) -> Result<()> {
        let scene = self.renderer.layout(self.session.board());
        self.presenter.draw_scene(&scene)?;
        self.presenter.present()
    }

    /// Reads one line of input and applies every action in it.
    pub fn process_input_cycle(&mut self) -> Result<OrchestratorStatus> {
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Failed to read input")?;
        if read == 0 {
            log::info!("Orchestrator: input closed. Signaling shutdown.");
            return Ok(OrchestratorStatus::Shutdown);
        }

        for action in map_line(&line, &self.config.keybindings) {
            match action {
                KeyAction::Quit => {
                    log::info!("Orchestrator: quit requested.");
                    return Ok(OrchestratorStatus::Shutdown);
                }
                KeyAction::Move(direction) => {
                    let outcome = self.session.apply(direction);
                    self.present(&outcome)?;
                    if outcome.game_over {
                        let message = format!("Game over after {} moves.", self.session.moves_made());
                        self.presenter.show_message(&message)?;
                        self.presenter.present()?;
                        return Ok(OrchestratorStatus::Shutdown);
                    }
                }
            }
        }
        Ok(OrchestratorStatus::Running)
    }

    /// Plays the move's animation frame by frame, then shows the resting board.
    fn present(&mut self, outcome: &MoveOutcome) -> Result<()> {
        let animations = self.session.take_animations();
        if outcome.changed() {
            let frames = self.renderer.frames(&outcome.before, &animations);
            log::debug!(
                "Orchestrator: playing {} animation frames, spawned at {:?}",
                frames.len(),
                outcome.result.spawned
            );
            let interval = self.renderer.frame_interval();
            for frame in &frames {
                self.presenter.draw_frame(frame)?;
                self.presenter.present()?;
                if !interval.is_zero() {
                    std::thread::sleep(interval);
                }
            }
        } else {
            log::debug!("Orchestrator: move {} changed nothing.", outcome.direction);
        }
        self.show_board()
    }
}
