/// Smallest value any threshold may take
pub const MIN_THRESHOLD: u8 = 0;
/// Largest value any threshold may take (a cell has at most 8 neighbors)
pub const MAX_THRESHOLD: u8 = 8;

/// The three neighbor-count thresholds that drive evolution.
/// Values are independent: `underpopulation > overpopulation` is allowed
/// and simply means no live cell survives.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Thresholds {
    /// A live cell with more live neighbors than this dies
    pub overpopulation: u8,
    /// A live cell with fewer live neighbors than this dies
    pub underpopulation: u8,
    /// A dead cell with exactly this many live neighbors is born
    pub reproduction: u8,
}

impl Thresholds {
    pub const fn new(overpopulation: u8, underpopulation: u8, reproduction: u8) -> Self {
        Self {
            overpopulation,
            underpopulation,
            reproduction,
        }
    }

    /// Conway's Life, B3/S23
    pub const fn classic() -> Self {
        Self::new(3, 2, 3)
    }

    pub const fn get(&self, kind: Threshold) -> u8 {
        match kind {
            Threshold::Overpopulation => self.overpopulation,
            Threshold::Underpopulation => self.underpopulation,
            Threshold::Reproduction => self.reproduction,
        }
    }

    pub fn set(&mut self, kind: Threshold, value: u8) {
        let slot = match kind {
            Threshold::Overpopulation => &mut self.overpopulation,
            Threshold::Underpopulation => &mut self.underpopulation,
            Threshold::Reproduction => &mut self.reproduction,
        };
        *slot = value.clamp(MIN_THRESHOLD, MAX_THRESHOLD);
    }

    pub fn in_range(&self) -> bool {
        Threshold::ALL
            .iter()
            .all(|&kind| (MIN_THRESHOLD..=MAX_THRESHOLD).contains(&self.get(kind)))
    }
}

impl Default for Thresholds {
    fn default() -> Self {
        Self::classic()
    }
}

/// Which threshold a panel control adjusts
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Threshold {
    Overpopulation,
    Underpopulation,
    Reproduction,
}

impl Threshold {
    /// Panel order, top to bottom
    pub const ALL: [Threshold; 3] = [
        Threshold::Overpopulation,
        Threshold::Underpopulation,
        Threshold::Reproduction,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Threshold::Overpopulation => "DEATH if > neighbors",
            Threshold::Underpopulation => "DEATH if < neighbors",
            Threshold::Reproduction => "LIFE if == neighbors",
        }
    }
}

/// A bounded integer parameter adjusted by a pair of buttons.
/// Geometry is not stored here; the panel layout derives it each frame.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Stepper {
    pub kind: Threshold,
    pub label: String,
    pub value: u8,
    pub min: u8,
    pub max: u8,
}

impl Stepper {
    pub fn new(kind: Threshold, value: u8) -> Self {
        Self {
            kind,
            label: kind.label().to_owned(),
            value: value.clamp(MIN_THRESHOLD, MAX_THRESHOLD),
            min: MIN_THRESHOLD,
            max: MAX_THRESHOLD,
        }
    }

    pub fn decrement(&mut self) -> u8 {
        self.value = self.value.saturating_sub(1).max(self.min);
        self.value
    }

    pub fn increment(&mut self) -> u8 {
        self.value = self.value.saturating_add(1).min(self.max);
        self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decrement_stops_at_zero() {
        let mut stepper = Stepper::new(Threshold::Underpopulation, 3);
        for _ in 0..20 {
            stepper.decrement();
        }
        assert_eq!(stepper.value, 0);
    }

    #[test]
    fn test_increment_stops_at_eight() {
        let mut stepper = Stepper::new(Threshold::Overpopulation, 6);
        assert_eq!(stepper.increment(), 7);
        assert_eq!(stepper.increment(), 8);
        assert_eq!(stepper.increment(), 8);
        assert_eq!(stepper.value, MAX_THRESHOLD);
    }

    #[test]
    fn test_new_clamps_initial_value() {
        assert_eq!(Stepper::new(Threshold::Reproduction, 42).value, 8);
    }

    #[test]
    fn test_set_clamps_and_targets_one_field() {
        let mut thresholds = Thresholds::classic();
        thresholds.set(Threshold::Reproduction, 12);
        assert_eq!(thresholds, Thresholds::new(3, 2, 8));
        thresholds.set(Threshold::Underpopulation, 0);
        assert_eq!(thresholds.get(Threshold::Underpopulation), 0);
        assert_eq!(thresholds.get(Threshold::Overpopulation), 3);
    }

    #[test]
    fn test_in_range() {
        assert!(Thresholds::classic().in_range());
        assert!(!Thresholds::new(9, 2, 3).in_range());
    }

    #[test]
    fn test_labels_match_panel_order() {
        let labels: Vec<_> = Threshold::ALL.iter().map(|t| t.label()).collect();
        assert_eq!(
            labels,
            ["DEATH if > neighbors", "DEATH if < neighbors", "LIFE if == neighbors"]
        );
    }
}
