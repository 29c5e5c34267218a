// ABOUTME: Application layer: state, events, and draft lifecycle glue

pub mod events;
pub mod state;

pub use events::{AppEvent, EventHandler};
pub use state::{AppState, StepField};

use anyhow::Result;
use tracing::{info, warn};

use crate::config::AppConfig;
use crate::onboarding::{OnboardingDraft, OnboardingFlow};

/// Top-level application: state plus config-driven draft handling
pub struct App {
    pub state: AppState,
    pub config: AppConfig,
}

impl App {
    /// Build the app, resuming a saved draft when one exists
    pub fn new(config: AppConfig) -> Self {
        let flow = if config.resume_drafts {
            match OnboardingDraft::load() {
                Ok(Some(draft)) => {
                    info!("resuming onboarding draft saved at {:?}", draft.saved_at);
                    draft.flow
                }
                Ok(None) => OnboardingFlow::new(),
                Err(e) => {
                    warn!("failed to load onboarding draft, starting fresh: {e:#}");
                    OnboardingFlow::new()
                }
            }
        } else {
            OnboardingFlow::new()
        };

        Self {
            state: AppState::new(flow),
            config,
        }
    }

    /// Persist or clear the draft according to what happened this tick.
    /// Called from the main loop after events are processed.
    pub fn sync_draft(&mut self) -> Result<()> {
        if self.state.completed {
            // The storefront launched; the draft is no longer needed
            OnboardingDraft::clear()?;
            return Ok(());
        }

        if self.config.resume_drafts && self.state.take_dirty() {
            OnboardingDraft::from_flow(self.state.store.flow()).save()?;
        }

        Ok(())
    }
}
