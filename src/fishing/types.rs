//! Core types for the fishing session.

#![allow(dead_code)]

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A catchable species from the catalogue.
///
/// The catalogue is configured once at startup and treated as read-only
/// reference data; sprites and other presentation details live in the UI
/// layer, keyed by `name`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FishSpecies {
    pub name: String,
    pub points: u32,
}

impl FishSpecies {
    pub fn new(name: impl Into<String>, points: u32) -> Self {
        Self {
            name: name.into(),
            points,
        }
    }
}

/// Phase of the fishing state machine.
///
/// `Idle` doubles as the "ready to re-cast" state: both a successful catch
/// and an escape return here rather than re-entering the wait directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FishingPhase {
    Idle,
    WaitingForBite,
    CatchWindow,
}

/// Outcome of the most recent cast. Cleared on the next cast.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatchOutcome {
    None,
    Escaped,
    Caught(FishSpecies),
}

/// Edge-triggered action signals for one frame.
///
/// The host computes these from key events once per frame; the session
/// never touches raw device state. Each flag is true only on the frame
/// the action key went down.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameInput {
    pub cast_or_catch: bool,
    pub toggle_stats: bool,
    pub reset_stats: bool,
}

impl FrameInput {
    /// Input with only the cast/catch action pressed. Convenient in tests.
    pub fn press() -> Self {
        Self {
            cast_or_catch: true,
            ..Self::default()
        }
    }
}

/// What happened during one `advance()` call.
///
/// The session does no I/O itself; the host uses this to write the save
/// file and push log messages.
#[derive(Debug, Clone, Default)]
pub struct AdvanceResult {
    /// Fish landed this frame, if any.
    pub caught: Option<FishSpecies>,
    /// The catch window expired this frame without a catch.
    pub escaped: bool,
    /// Lifetime stats were cleared this frame.
    pub stats_reset: bool,
}

/// On-disk snapshot of the lifetime catch history.
///
/// Field names match the save file format: a single flat JSON object,
/// `{ "CatchList": { "<species>": <count> }, "Points": <int> }`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveData {
    #[serde(rename = "CatchList", default)]
    pub catch_list: HashMap<String, u32>,
    #[serde(rename = "Points", default)]
    pub points: u64,
}
