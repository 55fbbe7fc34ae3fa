//! Measurement infrastructure for trigger-bracketed sampling.
//!
//! This module provides:
//! - The trigger-line capability consumed by external capture equipment
//! - The blocking delay primitive used for settling and spacing
//! - The sample driver that sequences one phase of measured work

mod delay;
mod sampler;
mod trigger;

pub use delay::{Delay, HostDelay};
pub use sampler::Sampler;
pub use trigger::{NullTrigger, TriggerLine};
