// ABOUTME: Draft persistence for the onboarding wizard
// Lets a merchant quit mid-flow and resume where they left off

use anyhow::{Context, Result};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;

use super::flow::{OnboardingFlow, PaymentData};

/// Onboarding draft persisted to disk between sessions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OnboardingDraft {
    /// The saved flow state
    #[serde(default)]
    pub flow: OnboardingFlow,

    /// When the draft was last written (ISO 8601 timestamp)
    #[serde(default)]
    pub saved_at: Option<String>,

    /// Version of the wizard that wrote the draft
    /// Used to discard drafts across major updates
    #[serde(default = "default_version")]
    pub version: String,
}

fn default_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

impl Default for OnboardingDraft {
    fn default() -> Self {
        Self {
            flow: OnboardingFlow::default(),
            saved_at: None,
            version: default_version(),
        }
    }
}

impl OnboardingDraft {
    /// Snapshot the given flow for saving.
    /// The payment account number never touches disk; the merchant re-enters
    /// it when resuming.
    pub fn from_flow(flow: &OnboardingFlow) -> Self {
        let mut flow = flow.clone();
        flow.payment_data = PaymentData {
            account_number: String::new(),
            ..flow.payment_data
        };
        Self {
            flow,
            saved_at: Some(Utc::now().to_rfc3339()),
            version: default_version(),
        }
    }

    /// Get the path to the draft file
    pub fn draft_path() -> Result<PathBuf> {
        Ok(base_dir()?.join("onboarding-draft.toml"))
    }

    /// Load the draft from the default location
    pub fn load() -> Result<Option<Self>> {
        Self::load_from(&Self::draft_path()?)
    }

    /// Load a draft from an explicit path
    pub fn load_from(path: &Path) -> Result<Option<Self>> {
        if !path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read onboarding draft from {}", path.display()))?;

        let draft: OnboardingDraft = toml::from_str(&content)
            .with_context(|| format!("Failed to parse onboarding draft from {}", path.display()))?;

        if !draft.same_major_version() {
            info!(
                "Discarding onboarding draft from version {} (running {})",
                draft.version,
                env!("CARGO_PKG_VERSION")
            );
            return Ok(None);
        }

        Ok(Some(draft))
    }

    /// Save the draft to the default location
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::draft_path()?)
    }

    /// Save the draft to an explicit path, atomically
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let parent = path
            .parent()
            .context("Draft path has no parent directory")?;
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create draft directory: {}", parent.display()))?;

        let content = toml::to_string_pretty(self).context("Failed to serialize onboarding draft")?;

        // Write-then-rename so an interrupted save never leaves a torn draft
        let mut tmp = tempfile::NamedTempFile::new_in(parent)
            .context("Failed to create temporary draft file")?;
        tmp.write_all(content.as_bytes())
            .context("Failed to write onboarding draft")?;
        tmp.persist(path)
            .with_context(|| format!("Failed to write onboarding draft to {}", path.display()))?;

        Ok(())
    }

    /// Remove any saved draft
    pub fn clear() -> Result<()> {
        Self::clear_at(&Self::draft_path()?)
    }

    /// Remove a draft at an explicit path
    pub fn clear_at(path: &Path) -> Result<()> {
        if path.exists() {
            fs::remove_file(path)
                .with_context(|| format!("Failed to remove {}", path.display()))?;
        }
        Ok(())
    }

    fn same_major_version(&self) -> bool {
        let current_major = env!("CARGO_PKG_VERSION").split('.').next().unwrap_or("0");
        let saved_major = self.version.split('.').next().unwrap_or("0");
        current_major == saved_major
    }
}

/// Get the base fabrica directory
pub fn base_dir() -> Result<PathBuf> {
    let home = dirs::home_dir().context("Could not determine home directory")?;
    Ok(home.join(".fabrica"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::onboarding::flow::{OnboardingStep, PaymentProvider};
    use tempfile::TempDir;

    #[test]
    fn test_account_number_never_saved() {
        let mut flow = OnboardingFlow::new();
        flow.payment_data.provider = Some(PaymentProvider::Telebirr);
        flow.payment_data.account_number = "0911223344".to_string();
        flow.payment_data.account_name = "Abebe Bikila".to_string();

        let draft = OnboardingDraft::from_flow(&flow);

        assert_eq!(draft.flow.payment_data.account_number, "");
        assert_eq!(draft.flow.payment_data.account_name, "Abebe Bikila");
        assert_eq!(
            draft.flow.payment_data.provider,
            Some(PaymentProvider::Telebirr)
        );
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("draft.toml");

        let mut flow = OnboardingFlow::new();
        flow.user_data.username = "abebe".to_string();
        flow.set_step(OnboardingStep::Payment);

        let draft = OnboardingDraft::from_flow(&flow);
        draft.save_to(&path).unwrap();

        let loaded = OnboardingDraft::load_from(&path).unwrap().unwrap();
        assert_eq!(loaded.flow.user_data.username, "abebe");
        assert_eq!(loaded.flow.current_step, OnboardingStep::Payment);
        assert!(loaded.saved_at.is_some());
    }

    #[test]
    fn test_load_missing_draft() {
        let dir = TempDir::new().unwrap();
        let loaded = OnboardingDraft::load_from(&dir.path().join("missing.toml")).unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn test_clear_draft() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("draft.toml");

        OnboardingDraft::default().save_to(&path).unwrap();
        assert!(path.exists());

        OnboardingDraft::clear_at(&path).unwrap();
        assert!(!path.exists());

        // Clearing an absent draft is fine
        OnboardingDraft::clear_at(&path).unwrap();
    }

    #[test]
    fn test_draft_from_other_major_version_discarded() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("draft.toml");

        let mut draft = OnboardingDraft::default();
        draft.version = "99.0.0".to_string();
        draft.save_to(&path).unwrap();

        assert!(OnboardingDraft::load_from(&path).unwrap().is_none());
    }
}
