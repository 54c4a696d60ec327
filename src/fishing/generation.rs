//! Catalogue configuration and random draws for the fishing session.

use super::types::FishSpecies;
use crate::constants::{BITE_INTERVAL_MAX_SECONDS, BITE_INTERVAL_MIN_SECONDS};
use rand::Rng;

/// Default species catalogue: (name, points).
///
/// Ordered; the session draws uniformly by index. The Old Boot is the
/// zero-point junk catch.
pub const DEFAULT_CATALOGUE: [(&str, u32); 6] = [
    ("Minnow", 5),
    ("Perch", 10),
    ("Trout", 15),
    ("Salmon", 25),
    ("Pike", 40),
    ("Old Boot", 0),
];

/// Builds the default catalogue as owned species records.
pub fn default_catalogue() -> Vec<FishSpecies> {
    DEFAULT_CATALOGUE
        .iter()
        .map(|&(name, points)| FishSpecies::new(name, points))
        .collect()
}

/// Draws the seconds-until-bite threshold for a fresh cast.
///
/// Integer draw from `[2, 6)`, i.e. one of {2, 3, 4, 5} seconds.
pub fn roll_bite_interval(rng: &mut impl Rng) -> f64 {
    rng.gen_range(BITE_INTERVAL_MIN_SECONDS..BITE_INTERVAL_MAX_SECONDS) as f64
}

/// Draws the catalogue index of the fish that will bite next.
///
/// The catalogue is validated non-empty at session construction, so the
/// draw always succeeds.
pub fn roll_species_index(catalogue_len: usize, rng: &mut impl Rng) -> usize {
    rng.gen_range(0..catalogue_len)
}
