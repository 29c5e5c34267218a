// ABOUTME: Application state for the onboarding wizard TUI
// Owns the flow store and tracks field focus, quit and completion flags

use std::cell::Cell;
use std::rc::Rc;

use tracing::info;

use crate::onboarding::{
    OnboardingFlow, OnboardingStep, OnboardingStore, PaymentDataPatch, PaymentProvider,
    ProductDataPatch, ProductKind, UserDataPatch,
};

/// One interactive field on a wizard step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepField {
    Username,
    FullName,
    Bio,
    AvatarUrl,
    Provider,
    AccountName,
    AccountNumber,
    ProductKind,
    Title,
    Description,
    Price,
}

impl StepField {
    /// Fields shown on each step, in focus order
    pub fn for_step(step: OnboardingStep) -> &'static [StepField] {
        match step {
            OnboardingStep::Username => &[Self::Username],
            OnboardingStep::Profile => &[Self::FullName, Self::Bio, Self::AvatarUrl],
            OnboardingStep::Payment => &[Self::Provider, Self::AccountName, Self::AccountNumber],
            OnboardingStep::Product => {
                &[Self::ProductKind, Self::Title, Self::Description, Self::Price]
            }
            OnboardingStep::Preview => &[],
        }
    }

    /// Whether this field is a choice selector rather than free text
    pub fn is_selector(&self) -> bool {
        matches!(self, Self::Provider | Self::ProductKind)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Username => "Username",
            Self::FullName => "Full name",
            Self::Bio => "Bio",
            Self::AvatarUrl => "Avatar URL",
            Self::Provider => "Payout provider",
            Self::AccountName => "Account holder name",
            Self::AccountNumber => "Account number",
            Self::ProductKind => "Product type",
            Self::Title => "Title",
            Self::Description => "Description",
            Self::Price => "Price (ETB)",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            Self::Username => "yourname",
            Self::FullName => "Your display name",
            Self::Bio => "Tell customers what you make",
            Self::AvatarUrl => "https://... (optional)",
            Self::Provider => "",
            Self::AccountName => "Full name as registered with your provider",
            Self::AccountNumber => "09...",
            Self::ProductKind => "",
            Self::Title => "My first product",
            Self::Description => "What buyers get",
            Self::Price => "0",
        }
    }
}

/// Full application state
pub struct AppState {
    /// The onboarding flow store; the single instance for this session
    pub store: OnboardingStore,
    /// Index into [`StepField::for_step`] for the current step
    pub focused_field: usize,
    /// Whether the main loop should exit
    pub should_quit: bool,
    /// Set when the merchant launched their store from the preview step
    pub completed: bool,
    /// Whether the keymap help overlay is visible
    pub help_visible: bool,
    /// Set by a store subscriber whenever the flow changes; drained by the
    /// main loop to autosave the draft
    dirty: Rc<Cell<bool>>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(OnboardingFlow::new())
    }
}

impl AppState {
    pub fn new(flow: OnboardingFlow) -> Self {
        let mut store = OnboardingStore::with_flow(flow);
        let dirty = Rc::new(Cell::new(false));

        let dirty_clone = Rc::clone(&dirty);
        store.subscribe(move |_| dirty_clone.set(true));

        Self {
            store,
            focused_field: 0,
            should_quit: false,
            completed: false,
            help_visible: false,
            dirty,
        }
    }

    pub fn current_step(&self) -> OnboardingStep {
        self.store.current_step()
    }

    /// The field that currently has focus, if the step has any
    pub fn focused(&self) -> Option<StepField> {
        StepField::for_step(self.current_step())
            .get(self.focused_field)
            .copied()
    }

    /// Take the dirty flag, returning whether the flow changed since last call
    pub fn take_dirty(&self) -> bool {
        self.dirty.replace(false)
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn toggle_help(&mut self) {
        self.help_visible = !self.help_visible;
    }

    /// Move focus to the next field on the step, wrapping around
    pub fn next_field(&mut self) {
        let count = StepField::for_step(self.current_step()).len();
        if count > 0 {
            self.focused_field = (self.focused_field + 1) % count;
        }
    }

    /// Move focus to the previous field on the step, wrapping around
    pub fn prev_field(&mut self) {
        let count = StepField::for_step(self.current_step()).len();
        if count > 0 {
            self.focused_field = (self.focused_field + count - 1) % count;
        }
    }

    /// Advance to the next step; from the preview step this launches the
    /// storefront and ends the wizard
    pub fn submit_step(&mut self) {
        if self.current_step() == OnboardingStep::Preview {
            info!("merchant launched their storefront");
            self.completed = true;
            self.should_quit = true;
            return;
        }
        self.store.next_step();
        self.focused_field = 0;
    }

    /// Go back one step; from the first step this exits the wizard
    pub fn back_step(&mut self) {
        if self.store.flow().can_go_back() {
            self.store.prev_step();
            self.focused_field = 0;
        } else {
            self.quit();
        }
    }

    /// Start the wizard over, discarding everything entered so far
    pub fn reset_flow(&mut self) {
        self.store.reset();
        self.focused_field = 0;
    }

    /// Current display value of a field
    pub fn field_value(&self, field: StepField) -> String {
        let flow = self.store.flow();
        match field {
            StepField::Username => flow.user_data.username.clone(),
            StepField::FullName => flow.user_data.full_name.clone(),
            StepField::Bio => flow.user_data.bio.clone(),
            StepField::AvatarUrl => flow.user_data.avatar_url.clone().unwrap_or_default(),
            StepField::Provider => flow
                .payment_data
                .provider
                .map_or_else(|| "none".to_string(), |p| p.label().to_string()),
            StepField::AccountName => flow.payment_data.account_name.clone(),
            StepField::AccountNumber => flow.payment_data.account_number.clone(),
            StepField::ProductKind => flow.product_data.kind.label().to_string(),
            StepField::Title => flow.product_data.title.clone(),
            StepField::Description => flow.product_data.description.clone(),
            StepField::Price => flow.product_data.price.clone(),
        }
    }

    /// Append a character to the focused text field
    pub fn input_char(&mut self, ch: char) {
        let Some(field) = self.focused() else { return };
        if field.is_selector() {
            return;
        }
        let mut value = self.field_value(field);
        value.push(ch);
        self.write_field(field, value);
    }

    /// Delete the last character of the focused text field
    pub fn backspace(&mut self) {
        let Some(field) = self.focused() else { return };
        if field.is_selector() {
            return;
        }
        let mut value = self.field_value(field);
        value.pop();
        self.write_field(field, value);
    }

    /// Cycle the focused selector forward
    pub fn selector_next(&mut self) {
        match self.focused() {
            Some(StepField::Provider) => {
                let next = match self.store.flow().payment_data.provider {
                    None | Some(PaymentProvider::Telebirr) => PaymentProvider::Chapa,
                    Some(PaymentProvider::Chapa) => PaymentProvider::Telebirr,
                };
                self.store.update_payment_data(PaymentDataPatch {
                    provider: Some(Some(next)),
                    ..Default::default()
                });
            }
            Some(StepField::ProductKind) => {
                let next = match self.store.flow().product_data.kind {
                    ProductKind::Digital => ProductKind::Booking,
                    ProductKind::Booking => ProductKind::Link,
                    ProductKind::Link => ProductKind::Digital,
                };
                self.store.update_product_data(ProductDataPatch {
                    kind: Some(next),
                    ..Default::default()
                });
            }
            _ => {}
        }
    }

    /// Cycle the focused selector backward
    pub fn selector_prev(&mut self) {
        match self.focused() {
            Some(StepField::Provider) => {
                let prev = match self.store.flow().payment_data.provider {
                    None | Some(PaymentProvider::Chapa) => PaymentProvider::Telebirr,
                    Some(PaymentProvider::Telebirr) => PaymentProvider::Chapa,
                };
                self.store.update_payment_data(PaymentDataPatch {
                    provider: Some(Some(prev)),
                    ..Default::default()
                });
            }
            Some(StepField::ProductKind) => {
                let prev = match self.store.flow().product_data.kind {
                    ProductKind::Digital => ProductKind::Link,
                    ProductKind::Booking => ProductKind::Digital,
                    ProductKind::Link => ProductKind::Booking,
                };
                self.store.update_product_data(ProductDataPatch {
                    kind: Some(prev),
                    ..Default::default()
                });
            }
            _ => {}
        }
    }

    fn write_field(&mut self, field: StepField, value: String) {
        match field {
            StepField::Username => {
                // Usernames become part of the storefront URL; keep them
                // lowercase and URL-safe as they are typed
                let normalized: String = value
                    .to_lowercase()
                    .chars()
                    .filter(|c| c.is_ascii_alphanumeric() || *c == '-' || *c == '_')
                    .collect();
                self.store.update_user_data(UserDataPatch {
                    username: Some(normalized),
                    ..Default::default()
                });
            }
            StepField::FullName => self.store.update_user_data(UserDataPatch {
                full_name: Some(value),
                ..Default::default()
            }),
            StepField::Bio => self.store.update_user_data(UserDataPatch {
                bio: Some(value),
                ..Default::default()
            }),
            StepField::AvatarUrl => {
                let avatar = if value.is_empty() { None } else { Some(value) };
                self.store.update_user_data(UserDataPatch {
                    avatar_url: Some(avatar),
                    ..Default::default()
                });
            }
            StepField::AccountName => self.store.update_payment_data(PaymentDataPatch {
                account_name: Some(value),
                ..Default::default()
            }),
            StepField::AccountNumber => self.store.update_payment_data(PaymentDataPatch {
                account_number: Some(value),
                ..Default::default()
            }),
            StepField::Title => self.store.update_product_data(ProductDataPatch {
                title: Some(value),
                ..Default::default()
            }),
            StepField::Description => self.store.update_product_data(ProductDataPatch {
                description: Some(value),
                ..Default::default()
            }),
            StepField::Price => {
                let digits: String = value
                    .chars()
                    .filter(|c| c.is_ascii_digit() || *c == '.')
                    .collect();
                self.store.update_product_data(ProductDataPatch {
                    price: Some(digits),
                    ..Default::default()
                });
            }
            StepField::Provider | StepField::ProductKind => {}
        }
    }
}
