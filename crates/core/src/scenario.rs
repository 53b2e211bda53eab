//! Difficulty table: how often garbage spawns and what the info panel says
//! for a given year.

/// Year-indexed difficulty.
pub trait Scenario {
    /// Ticks between two garbage spawns, or `None` while the orbit is clean.
    fn garbage_delay(&self, year: u32) -> Option<u32>;

    /// Headline for the year, if that year has one.
    fn phrase(&self, year: u32) -> Option<&str>;
}

const PHRASES: [(u32, &str); 8] = [
    (1957, "First Sputnik"),
    (1961, "Gagarin flew!"),
    (1969, "Armstrong got on the moon!"),
    (1971, "First orbital space station Salute-1"),
    (1981, "Flight of the Shuttle Columbia"),
    (1998, "ISS start building"),
    (2011, "Messenger launch to Mercury"),
    (2020, "Take the plasma gun! Shoot the garbage!"),
];

/// Space race history from Sputnik to the plasma gun.
///
/// | Years | Spawn delay (ticks) |
/// |-------|---------------------|
/// | < 1961 | none |
/// | 1961-1968 | 20 |
/// | 1969-1980 | 14 |
/// | 1981-1994 | 10 |
/// | 1995-2009 | 8 |
/// | 2010-2019 | 6 |
/// | 2020+ | 2 |
#[derive(Debug, Clone, Copy, Default)]
pub struct SpaceRace;

impl Scenario for SpaceRace {
    fn garbage_delay(&self, year: u32) -> Option<u32> {
        match year {
            0..=1960 => None,
            1961..=1968 => Some(20),
            1969..=1980 => Some(14),
            1981..=1994 => Some(10),
            1995..=2009 => Some(8),
            2010..=2019 => Some(6),
            _ => Some(2),
        }
    }

    fn phrase(&self, year: u32) -> Option<&str> {
        PHRASES
            .iter()
            .find(|(y, _)| *y == year)
            .map(|(_, phrase)| *phrase)
    }
}
