use std::fmt;

use crate::error::{require_non_negative, require_positive, StatError};

/// Secondary attack: something the zombie throws.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Throw {
    projectile: String,
    power: i32,
    cooldown: i32,
}

impl Throw {
    pub fn new(projectile: impl Into<String>, power: i32, cooldown: i32) -> Self {
        Throw {
            projectile: projectile.into(),
            power,
            cooldown,
        }
    }

    pub fn projectile(&self) -> &str {
        &self.projectile
    }

    pub fn set_projectile(&mut self, projectile: impl Into<String>) {
        self.projectile = projectile.into();
    }

    pub fn power(&self) -> i32 {
        self.power
    }

    pub fn set_power(&mut self, power: i32) -> Result<(), StatError> {
        self.power = require_positive("power", power)?;
        Ok(())
    }

    /// Seconds between throws.
    pub fn cooldown(&self) -> i32 {
        self.cooldown
    }

    pub fn set_cooldown(&mut self, cooldown: i32) -> Result<(), StatError> {
        self.cooldown = require_non_negative("cooldown", cooldown)?;
        Ok(())
    }
}

impl fmt::Display for Throw {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Throw[{}, power={}, cooldown={}s]",
            self.projectile, self.power, self.cooldown
        )
    }
}
