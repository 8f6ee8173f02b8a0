#![warn(clippy::all, missing_docs)]

//! Core domain logic for the raidkit toolkit.
//!
//! This crate hosts the persisted account store, the black-market and
//! tier-crafting calculators, the entry registry, and configuration
//! handling used by the terminal UI.

pub mod config;
pub mod crafting;
pub mod input;
pub mod market;
pub mod registry;
pub mod store;

pub use config::AppConfig;
pub use crafting::{plan, plan_from_input, CraftPlan, OwnedMaterials};
pub use input::InputError;
pub use market::{quote, quote_from_input, MarketQuote};
pub use registry::EntryRegistry;
pub use store::{DataStore, Section, Store, StoreError};
