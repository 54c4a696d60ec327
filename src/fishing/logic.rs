//! The fishing state machine.
//!
//! One cast is a two-timer sequence: a randomly drawn wait until the bite,
//! then a fixed catch window in which the catch press must land. Both the
//! success and the failure exit re-arm the next draw and return to `Idle`,
//! so the player always re-casts explicitly.

#![allow(dead_code)]

use super::generation::{roll_bite_interval, roll_species_index};
use super::types::{
    AdvanceResult, CatchOutcome, FishSpecies, FishingPhase, FrameInput, SaveData,
};
use crate::constants::CATCH_WINDOW_SECONDS;
use rand::Rng;
use std::collections::HashMap;
use std::fmt;

/// Startup rejection for a catalogue with no species to draw from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyCatalogueError;

impl fmt::Display for EmptyCatalogueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "fish catalogue is empty; at least one species is required")
    }
}

impl std::error::Error for EmptyCatalogueError {}

/// Owns the fishing state machine and the lifetime catch statistics.
///
/// Mutated exclusively through `advance()` (and the discrete reset/toggle
/// operations) by the single thread driving the frame loop. Persistence is
/// the host's job; the session only produces and consumes [`SaveData`]
/// snapshots.
pub struct FishingSession {
    catalogue: Vec<FishSpecies>,
    pub phase: FishingPhase,
    /// Seconds since the rod was cast. Only advances while waiting for a bite.
    pub bite_timer: f64,
    /// Threshold at which the bite fires, redrawn on every re-arm.
    pub bite_interval: f64,
    /// Seconds remaining in the catch window. Meaningful only in `CatchWindow`.
    pub catch_timer: f64,
    /// Catalogue index of the fish pre-selected to bite.
    pub next_fish: usize,
    pub last_catch: CatchOutcome,
    pub total_points: u64,
    /// Lifetime catches per species name. Absent means never caught.
    pub catch_counts: HashMap<String, u32>,
    /// Whether the histogram view is shown instead of the water scene.
    pub stats_view: bool,
}

impl FishingSession {
    /// Creates a session over a non-empty species catalogue.
    pub fn new(
        catalogue: Vec<FishSpecies>,
        rng: &mut impl Rng,
    ) -> Result<Self, EmptyCatalogueError> {
        if catalogue.is_empty() {
            return Err(EmptyCatalogueError);
        }

        let bite_interval = roll_bite_interval(rng);
        let next_fish = roll_species_index(catalogue.len(), rng);

        Ok(Self {
            catalogue,
            phase: FishingPhase::Idle,
            bite_timer: 0.0,
            bite_interval,
            catch_timer: 0.0,
            next_fish,
            last_catch: CatchOutcome::None,
            total_points: 0,
            catch_counts: HashMap::new(),
            stats_view: false,
        })
    }

    /// Creates a session and restores the lifetime stats from a save snapshot.
    pub fn with_save(
        catalogue: Vec<FishSpecies>,
        save: SaveData,
        rng: &mut impl Rng,
    ) -> Result<Self, EmptyCatalogueError> {
        let mut session = Self::new(catalogue, rng)?;
        session.apply_save(save);
        Ok(session)
    }

    /// Advances the state machine by one frame.
    ///
    /// `elapsed` is the wall-clock seconds since the previous frame and
    /// `input` carries this frame's edge-triggered actions. The catch-press
    /// branch is checked before the timeout branch, so a press on the very
    /// frame the window closes still lands the fish.
    pub fn advance(
        &mut self,
        elapsed: f64,
        input: FrameInput,
        rng: &mut impl Rng,
    ) -> AdvanceResult {
        let mut result = AdvanceResult::default();

        if input.toggle_stats {
            self.toggle_stats_view();
        }
        if input.reset_stats {
            self.reset_stats();
            result.stats_reset = true;
        }

        match self.phase {
            FishingPhase::Idle => {
                if input.cast_or_catch {
                    self.last_catch = CatchOutcome::None;
                    self.re_arm(rng);
                    self.phase = FishingPhase::WaitingForBite;
                }
            }
            FishingPhase::WaitingForBite => {
                self.bite_timer += elapsed;
                if self.bite_timer > self.bite_interval {
                    self.catch_timer = CATCH_WINDOW_SECONDS;
                    self.phase = FishingPhase::CatchWindow;
                }
            }
            FishingPhase::CatchWindow => {
                self.catch_timer -= elapsed;
                if input.cast_or_catch {
                    let fish = self.catalogue[self.next_fish].clone();
                    self.total_points += u64::from(fish.points);
                    *self.catch_counts.entry(fish.name.clone()).or_insert(0) += 1;
                    self.last_catch = CatchOutcome::Caught(fish.clone());
                    result.caught = Some(fish);
                    self.re_arm(rng);
                    self.phase = FishingPhase::Idle;
                } else if self.catch_timer <= 0.0 {
                    self.last_catch = CatchOutcome::Escaped;
                    result.escaped = true;
                    self.re_arm(rng);
                    self.phase = FishingPhase::Idle;
                }
            }
        }

        result
    }

    // Shared by the cast and by both catch-window exits.
    fn re_arm(&mut self, rng: &mut impl Rng) {
        self.bite_timer = 0.0;
        self.bite_interval = roll_bite_interval(rng);
        self.next_fish = roll_species_index(self.catalogue.len(), rng);
    }

    /// Flips between the water scene and the histogram view.
    pub fn toggle_stats_view(&mut self) {
        self.stats_view = !self.stats_view;
    }

    /// Clears the lifetime statistics.
    ///
    /// Idempotent, and deliberately leaves the in-flight cast untouched.
    pub fn reset_stats(&mut self) {
        self.catch_counts.clear();
        self.total_points = 0;
    }

    /// Snapshot of the lifetime stats for the save file.
    pub fn save_data(&self) -> SaveData {
        SaveData {
            catch_list: self.catch_counts.clone(),
            points: self.total_points,
        }
    }

    /// Restores the lifetime stats from a save snapshot.
    pub fn apply_save(&mut self, save: SaveData) {
        self.catch_counts = save.catch_list;
        self.total_points = save.points;
    }

    pub fn catalogue(&self) -> &[FishSpecies] {
        &self.catalogue
    }

    /// Points configured for a species name, if it is in the catalogue.
    pub fn points_of(&self, name: &str) -> Option<u32> {
        self.catalogue
            .iter()
            .find(|s| s.name == name)
            .map(|s| s.points)
    }

    /// Lifetime number of fish landed across all species.
    pub fn total_catches(&self) -> u32 {
        self.catch_counts.values().sum()
    }

    /// User-facing status line for the current state.
    pub fn status_message(&self) -> String {
        match self.phase {
            FishingPhase::Idle => match &self.last_catch {
                CatchOutcome::None => "Press Space to cast".to_string(),
                CatchOutcome::Escaped => {
                    "The fish got away! Press Space to cast again".to_string()
                }
                CatchOutcome::Caught(fish) => {
                    format!("You caught a {}! Press Space to cast again", fish.name)
                }
            },
            FishingPhase::WaitingForBite => "Line cast... waiting for a bite".to_string(),
            FishingPhase::CatchWindow => "Hooked! Press Space to catch".to_string(),
        }
    }
}
