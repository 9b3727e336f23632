//! Capability-based tool policy.
//!
//! Core principle: **every tool call is checked against the capability it
//! declares before it touches the page.**

mod capability;
mod error;
mod policy;

pub use capability::{CapabilityKind, CapabilityRequest};
pub use error::{Error, Result};
pub use policy::{AllowRules, Decision, DenyRules, Policy};
