// ABOUTME: Core state machine for the merchant onboarding wizard
// Tracks the current step and the form data collected at each step

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Steps in the onboarding wizard, in fixed order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OnboardingStep {
    Username,
    Profile,
    Payment,
    Product,
    Preview,
}

/// Error for step identifiers outside the fixed five-step set
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("invalid onboarding step: {0:?} (expected one of username, profile, payment, product, preview)")]
pub struct InvalidStepError(pub String);

impl OnboardingStep {
    /// Get all steps in order
    pub fn all() -> &'static [OnboardingStep] {
        &[
            Self::Username,
            Self::Profile,
            Self::Payment,
            Self::Product,
            Self::Preview,
        ]
    }

    /// Get the step number (1-indexed for display)
    pub fn number(&self) -> usize {
        match self {
            Self::Username => 1,
            Self::Profile => 2,
            Self::Payment => 3,
            Self::Product => 4,
            Self::Preview => 5,
        }
    }

    /// Get the total number of steps
    pub fn total() -> usize {
        5
    }

    /// Get display title for this step
    pub fn title(&self) -> &'static str {
        match self {
            Self::Username => "Username",
            Self::Profile => "Profile",
            Self::Payment => "Payment",
            Self::Product => "Product",
            Self::Preview => "Launch",
        }
    }

    /// Get description for this step
    pub fn description(&self) -> &'static str {
        match self {
            Self::Username => "Choose your unique username",
            Self::Profile => "Set up your profile",
            Self::Payment => "Connect payment account",
            Self::Product => "Create your first product",
            Self::Preview => "Preview and launch",
        }
    }

    /// Get the next step, if any
    pub fn next(&self) -> Option<Self> {
        match self {
            Self::Username => Some(Self::Profile),
            Self::Profile => Some(Self::Payment),
            Self::Payment => Some(Self::Product),
            Self::Product => Some(Self::Preview),
            Self::Preview => None,
        }
    }

    /// Get the previous step, if any
    pub fn previous(&self) -> Option<Self> {
        match self {
            Self::Username => None,
            Self::Profile => Some(Self::Username),
            Self::Payment => Some(Self::Profile),
            Self::Product => Some(Self::Payment),
            Self::Preview => Some(Self::Product),
        }
    }

    /// The wire/storage identifier for this step
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Username => "username",
            Self::Profile => "profile",
            Self::Payment => "payment",
            Self::Product => "product",
            Self::Preview => "preview",
        }
    }
}

impl fmt::Display for OnboardingStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OnboardingStep {
    type Err = InvalidStepError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "username" => Ok(Self::Username),
            "profile" => Ok(Self::Profile),
            "payment" => Ok(Self::Payment),
            "product" => Ok(Self::Product),
            "preview" => Ok(Self::Preview),
            other => Err(InvalidStepError(other.to_string())),
        }
    }
}

/// Supported payout providers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentProvider {
    Chapa,
    Telebirr,
}

impl PaymentProvider {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Chapa => "Chapa",
            Self::Telebirr => "Telebirr",
        }
    }
}

/// Kind of product a merchant can list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductKind {
    #[default]
    Digital,
    Booking,
    Link,
}

impl ProductKind {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Digital => "Digital Product",
            Self::Booking => "1-on-1 Booking",
            Self::Link => "External Link",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Digital => "eBooks, courses, templates, etc.",
            Self::Booking => "Consultations, coaching sessions",
            Self::Link => "Link to external content",
        }
    }
}

/// Data collected at the username and profile steps
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserData {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

/// Data collected at the payment step
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentData {
    #[serde(default)]
    pub provider: Option<PaymentProvider>,
    #[serde(default)]
    pub account_number: String,
    #[serde(default)]
    pub account_name: String,
}

/// Data collected at the product step
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductData {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub price: String,
    #[serde(default)]
    pub kind: ProductKind,
}

/// Partial update for [`UserData`]; `None` fields keep their previous value
#[derive(Debug, Clone, Default)]
pub struct UserDataPatch {
    pub username: Option<String>,
    pub full_name: Option<String>,
    pub bio: Option<String>,
    pub avatar_url: Option<Option<String>>,
}

/// Partial update for [`PaymentData`]
#[derive(Debug, Clone, Default)]
pub struct PaymentDataPatch {
    pub provider: Option<Option<PaymentProvider>>,
    pub account_number: Option<String>,
    pub account_name: Option<String>,
}

/// Partial update for [`ProductData`]
#[derive(Debug, Clone, Default)]
pub struct ProductDataPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub price: Option<String>,
    pub kind: Option<ProductKind>,
}

impl UserData {
    /// Shallow-merge a patch; fields not present in the patch are untouched
    pub fn apply(&mut self, patch: UserDataPatch) {
        if let Some(username) = patch.username {
            self.username = username;
        }
        if let Some(full_name) = patch.full_name {
            self.full_name = full_name;
        }
        if let Some(bio) = patch.bio {
            self.bio = bio;
        }
        if let Some(avatar_url) = patch.avatar_url {
            self.avatar_url = avatar_url;
        }
    }
}

impl PaymentData {
    /// Shallow-merge a patch; fields not present in the patch are untouched
    pub fn apply(&mut self, patch: PaymentDataPatch) {
        if let Some(provider) = patch.provider {
            self.provider = provider;
        }
        if let Some(account_number) = patch.account_number {
            self.account_number = account_number;
        }
        if let Some(account_name) = patch.account_name {
            self.account_name = account_name;
        }
    }
}

impl ProductData {
    /// Shallow-merge a patch; fields not present in the patch are untouched
    pub fn apply(&mut self, patch: ProductDataPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(price) = patch.price {
            self.price = price;
        }
        if let Some(kind) = patch.kind {
            self.kind = kind;
        }
    }
}

/// Full onboarding wizard state: current step plus the three data buckets
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OnboardingFlow {
    #[serde(default = "default_step")]
    pub current_step: OnboardingStep,
    #[serde(default)]
    pub user_data: UserData,
    #[serde(default)]
    pub payment_data: PaymentData,
    #[serde(default)]
    pub product_data: ProductData,
}

fn default_step() -> OnboardingStep {
    OnboardingStep::Username
}

impl Default for OnboardingStep {
    fn default() -> Self {
        Self::Username
    }
}

impl OnboardingFlow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance to the next step; no-op when already at the last step
    pub fn next_step(&mut self) {
        if let Some(next) = self.current_step.next() {
            self.current_step = next;
        }
    }

    /// Move to the previous step; no-op when already at the first step
    pub fn prev_step(&mut self) {
        if let Some(prev) = self.current_step.previous() {
            self.current_step = prev;
        }
    }

    /// Jump directly to the given step
    pub fn set_step(&mut self, step: OnboardingStep) {
        self.current_step = step;
    }

    /// Merge a partial update into the user data bucket
    pub fn update_user_data(&mut self, patch: UserDataPatch) {
        self.user_data.apply(patch);
    }

    /// Merge a partial update into the payment data bucket
    pub fn update_payment_data(&mut self, patch: PaymentDataPatch) {
        self.payment_data.apply(patch);
    }

    /// Merge a partial update into the product data bucket
    pub fn update_product_data(&mut self, patch: ProductDataPatch) {
        self.product_data.apply(patch);
    }

    /// Restore the initial state: first step, all buckets empty
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Check if we're on the final step
    pub fn is_final_step(&self) -> bool {
        self.current_step == OnboardingStep::Preview
    }

    /// Check if we can go back
    pub fn can_go_back(&self) -> bool {
        self.current_step.previous().is_some()
    }
}
