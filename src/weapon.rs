use std::fmt;

use crate::error::{require_positive, StatError};

/// A zombie's primary weapon. Plain value type: `Clone` is the copy
/// operation and produces storage unrelated to the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Weapon {
    kind: String,
    power: i32,
    reach: i32,
}

impl Weapon {
    pub fn new(kind: impl Into<String>, power: i32, reach: i32) -> Self {
        Weapon {
            kind: kind.into(),
            power,
            reach,
        }
    }

    /// The weapon every zombie starts with.
    pub fn bite() -> Self {
        Weapon::new("Bite", 10, 1)
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn set_kind(&mut self, kind: impl Into<String>) {
        self.kind = kind.into();
    }

    pub fn power(&self) -> i32 {
        self.power
    }

    /// Rejects non-positive values, keeping the current power.
    pub fn set_power(&mut self, power: i32) -> Result<(), StatError> {
        self.power = require_positive("power", power)?;
        Ok(())
    }

    pub fn reach(&self) -> i32 {
        self.reach
    }

    /// Rejects non-positive values, keeping the current reach.
    pub fn set_reach(&mut self, reach: i32) -> Result<(), StatError> {
        self.reach = require_positive("reach", reach)?;
        Ok(())
    }
}

impl fmt::Display for Weapon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Weapon[{}, power={}, reach={}]",
            self.kind, self.power, self.reach
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bite_defaults() {
        let weapon = Weapon::bite();
        assert_eq!(weapon.kind(), "Bite");
        assert_eq!(weapon.power(), 10);
        assert_eq!(weapon.reach(), 1);
    }

    #[test]
    fn test_set_power_rejects_non_positive() {
        let mut weapon = Weapon::new("Claw", 15, 1);
        assert!(weapon.set_power(0).is_err());
        assert!(weapon.set_power(-4).is_err());
        assert_eq!(weapon.power(), 15);

        weapon.set_power(30).unwrap();
        assert_eq!(weapon.power(), 30);
    }

    #[test]
    fn test_set_reach_rejects_non_positive() {
        let mut weapon = Weapon::new("Claw", 15, 2);
        assert_eq!(
            weapon.set_reach(0),
            Err(StatError::NonPositive { field: "reach", value: 0 })
        );
        assert_eq!(weapon.reach(), 2);
    }

    #[test]
    fn test_clone_is_independent() {
        let original = Weapon::new("Bite", 15, 1);
        let mut copy = original.clone();

        assert_eq!(copy, original);
        assert!(!std::ptr::eq(&copy, &original));

        copy.set_power(30).unwrap();
        copy.set_kind("Claw");
        assert_eq!(original.power(), 15);
        assert_eq!(original.kind(), "Bite");
    }

    #[test]
    fn test_display() {
        assert_eq!(
            Weapon::new("Bite", 15, 1).to_string(),
            "Weapon[Bite, power=15, reach=1]"
        );
    }
}
