// ABOUTME: Implementation of `fabrica-onboard status`
// Prints the saved draft as text or JSON

use anyhow::Result;

use super::OutputFormat;
use crate::onboarding::OnboardingDraft;

pub fn execute(format: OutputFormat) -> Result<()> {
    let draft = OnboardingDraft::load()?;

    match format {
        OutputFormat::Json => {
            let json = match &draft {
                Some(draft) => serde_json::to_string_pretty(draft)?,
                None => "null".to_string(),
            };
            println!("{json}");
        }
        OutputFormat::Text => match draft {
            None => println!("No onboarding draft saved."),
            Some(draft) => {
                let flow = &draft.flow;
                println!("Onboarding draft");
                if let Some(saved_at) = &draft.saved_at {
                    println!("  saved at:  {saved_at}");
                }
                println!("  step:      {}", flow.current_step);
                if !flow.user_data.username.is_empty() {
                    println!("  username:  {}", flow.user_data.username);
                }
                if !flow.user_data.full_name.is_empty() {
                    println!("  name:      {}", flow.user_data.full_name);
                }
                if let Some(provider) = flow.payment_data.provider {
                    println!("  payout:    {}", provider.label());
                }
                if !flow.product_data.title.is_empty() {
                    println!(
                        "  product:   {} ({})",
                        flow.product_data.title,
                        flow.product_data.kind.label()
                    );
                }
            }
        },
    }

    Ok(())
}
