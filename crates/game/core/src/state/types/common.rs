use std::fmt;

/// Integer resource meter (health, mana) tracked per combatant.
///
/// `current` is kept within `0..=maximum` by every mutating method and on
/// deserialization.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "MeterRecord"))]
pub struct ResourceMeter {
    pub current: u32,
    pub maximum: u32,
}

/// Unchecked on-disk shape, clamped through [`ResourceMeter::new`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct MeterRecord {
    current: u32,
    maximum: u32,
}

#[cfg(feature = "serde")]
impl From<MeterRecord> for ResourceMeter {
    fn from(record: MeterRecord) -> Self {
        Self::new(record.current, record.maximum)
    }
}

impl ResourceMeter {
    pub fn new(current: u32, maximum: u32) -> Self {
        Self {
            current: current.min(maximum),
            maximum,
        }
    }

    /// A meter filled to its maximum.
    pub fn full(maximum: u32) -> Self {
        Self::new(maximum, maximum)
    }

    /// Remove up to `amount`, stopping at zero. Returns the amount removed.
    pub fn drain(&mut self, amount: u32) -> u32 {
        let removed = amount.min(self.current);
        self.current -= removed;
        removed
    }

    /// Add up to `amount`, stopping at the maximum. Returns the amount added.
    pub fn restore(&mut self, amount: u32) -> u32 {
        let added = amount.min(self.maximum.saturating_sub(self.current));
        self.current += added;
        added
    }

    pub fn fill(&mut self) {
        self.current = self.maximum;
    }

    /// Overwrite the current value, clamped into range.
    pub fn set(&mut self, value: u32) {
        self.current = value.min(self.maximum);
    }

    /// Raise the maximum and refill.
    pub fn grow(&mut self, amount: u32) {
        self.maximum = self.maximum.saturating_add(amount);
        self.fill();
    }

    pub fn is_empty(&self) -> bool {
        self.current == 0
    }

    pub fn as_pair(&self) -> (u32, u32) {
        (self.current, self.maximum)
    }
}

impl fmt::Display for ResourceMeter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.current, self.maximum)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drain_stops_at_zero() {
        let mut meter = ResourceMeter::full(10);
        assert_eq!(meter.drain(25), 10);
        assert!(meter.is_empty());
    }

    #[test]
    fn restore_stops_at_maximum() {
        let mut meter = ResourceMeter::new(90, 100);
        assert_eq!(meter.restore(80), 10);
        assert_eq!(meter.current, 100);
    }

    #[test]
    fn new_clamps_current() {
        assert_eq!(ResourceMeter::new(999, 50).current, 50);
    }

    #[test]
    fn restore_on_overfilled_meter_adds_nothing() {
        let mut meter = ResourceMeter {
            current: 150,
            maximum: 100,
        };
        assert_eq!(meter.restore(10), 0);
    }
}
