// ABOUTME: Implementation of `fabrica-onboard reset`
// Removes any saved onboarding draft

use anyhow::Result;

use crate::onboarding::OnboardingDraft;

pub fn execute() -> Result<()> {
    let path = OnboardingDraft::draft_path()?;
    if path.exists() {
        OnboardingDraft::clear()?;
        println!("Removed onboarding draft at {}", path.display());
    } else {
        println!("No onboarding draft to remove.");
    }
    Ok(())
}
