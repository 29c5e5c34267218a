// ABOUTME: Onboarding flow controller for new Fabrica merchants
// Fixed five-step wizard: username, profile, payment, product, preview

pub mod draft;
pub mod flow;
pub mod store;

pub use draft::OnboardingDraft;
pub use flow::{
    InvalidStepError, OnboardingFlow, OnboardingStep, PaymentData, PaymentDataPatch,
    PaymentProvider, ProductData, ProductDataPatch, ProductKind, UserData, UserDataPatch,
};
pub use store::{OnboardingStore, SubscriberId};
