//! Location acquisition. The journal only needs a coordinate pair on
//! demand; where it comes from is behind [`LocationProvider`] so a real
//! GPS backend can be wired in later without touching the commands.

use crate::model::Location;
use rand::Rng;

pub trait LocationProvider {
    /// Current position. Providers that cannot produce a fix should
    /// return their best-effort last known location.
    fn current(&mut self) -> Location;
}

/// Simulated GPS: uniform random coordinates, rounded to the precision
/// the records carry.
#[derive(Debug, Default)]
pub struct StubGps;

impl LocationProvider for StubGps {
    fn current(&mut self) -> Location {
        let mut rng = rand::thread_rng();
        Location::rounded(rng.gen_range(-90.0..=90.0), rng.gen_range(-180.0..=180.0))
    }
}

/// Constant location, for tests.
#[derive(Debug, Clone, Copy)]
pub struct Fixed(pub Location);

impl LocationProvider for Fixed {
    fn current(&mut self) -> Location {
        self.0
    }
}
