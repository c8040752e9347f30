//! Frequency levels.
//!
//! Words are grouped in levels from the most frequently used to the rarely
//! used. Level sizes follow the usual coverage figures: 1000 words cover
//! about 80% of everyday language, 3000 about 95%, 5000 about 98% and 10000
//! about 99% of most texts (Nation 1990, Laufer 1997).

/// Rank limits of the 13 generic levels; level 13 (rank > 50000) is noise
pub const LANGUAGE_LEVEL_LIMITS: [u32; 13] = [
    0, 400, 1000, 1800, 2800, 4000, 5500, 7500, 10000, 14000, 20000, 30000, 50000,
];

/// Rank limits used for the BCCWJ corpus, whose long tail is much longer
pub const BCCWJ_LEVEL_LIMITS: [u32; 12] = [
    0, 700, 1500, 2500, 4000, 7000, 12000, 20000, 32000, 64000, 128000, 256000,
];

/// Highest level written as a tag file
pub const MAX_TAGGED_LEVEL: u8 = 12;

/// Maps a frequency rank to a level through ascending limits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelClassifier {
    limits: &'static [u32],
}

impl LevelClassifier {
    pub const fn new(limits: &'static [u32]) -> Self {
        Self { limits }
    }

    pub const fn language() -> Self {
        Self::new(&LANGUAGE_LEVEL_LIMITS)
    }

    pub const fn bccwj() -> Self {
        Self::new(&BCCWJ_LEVEL_LIMITS)
    }

    /// Number of limits strictly below `rank`; 0 only for rank 0
    pub fn level(&self, rank: u32) -> u8 {
        self.limits.iter().take_while(|&&limit| rank > limit).count() as u8
    }
}

impl Default for LevelClassifier {
    fn default() -> Self {
        Self::language()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_levels() {
        let classifier = LevelClassifier::language();
        assert_eq!(classifier.level(0), 0);
        assert_eq!(classifier.level(1), 1);
        assert_eq!(classifier.level(400), 1);
        assert_eq!(classifier.level(401), 2);
        assert_eq!(classifier.level(10000), 8);
        assert_eq!(classifier.level(10001), 9);
        assert_eq!(classifier.level(30001), 12);
        assert_eq!(classifier.level(50000), 12);
        assert_eq!(classifier.level(50001), 13);
    }

    #[test]
    fn test_bccwj_levels() {
        let classifier = LevelClassifier::bccwj();
        assert_eq!(classifier.level(700), 1);
        assert_eq!(classifier.level(701), 2);
        assert_eq!(classifier.level(256001), 12);
    }
}
