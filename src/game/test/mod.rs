//! Test module for the Coup rules engine.
//!
//! Covers the turn/action state machine, role abilities and the blocking
//! interactions, organized into logical submodules.

#![cfg(test)]

pub mod integration;
pub mod sanction;
