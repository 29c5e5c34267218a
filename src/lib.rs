// ABOUTME: Library crate for the Fabrica onboarding wizard, exposing the
// flow controller, store, draft persistence and event plumbing for testing

#![allow(missing_docs)]

pub mod app;
pub mod cli;
pub mod components;
pub mod config;
pub mod onboarding;
