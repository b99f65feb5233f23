// Demo scenario configuration, loaded from TOML.
//
// Every key is optional; missing keys fall back to the built-in scenario
// (Bob, 100 HP, Bite 15/1, Arm and Rock throws).

use std::env;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::{debug, info};

use crate::error::{ConfigError, ValidationErrors};
use crate::throw::Throw;
use crate::weapon::Weapon;
use crate::zombie::Zombie;

/// Environment variable naming an optional scenario file.
pub const CONFIG_ENV_VAR: &str = "ZOMBIE_DEMO_CONFIG";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WeaponConfig {
    pub kind: String,
    pub power: i32,
    pub reach: i32,
}

impl Default for WeaponConfig {
    fn default() -> Self {
        WeaponConfig {
            kind: "Bite".to_string(),
            power: 15,
            reach: 1,
        }
    }
}

impl WeaponConfig {
    pub fn build(&self) -> Weapon {
        Weapon::new(&self.kind, self.power, self.reach)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ThrowConfig {
    pub projectile: String,
    pub power: i32,
    pub cooldown: i32,
}

impl ThrowConfig {
    pub fn new(projectile: &str, power: i32, cooldown: i32) -> Self {
        ThrowConfig {
            projectile: projectile.to_string(),
            power,
            cooldown,
        }
    }

    pub fn build(&self) -> Throw {
        Throw::new(&self.projectile, self.power, self.cooldown)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ZombieConfig {
    pub name: String,
    pub hit_points: i32,
    pub weapon: WeaponConfig,
    pub secondary_attacks: Vec<ThrowConfig>,
    /// Move applied right after construction.
    pub opening_move: (i32, i32),
}

impl Default for ZombieConfig {
    fn default() -> Self {
        ZombieConfig {
            name: "Bob".to_string(),
            hit_points: 100,
            weapon: WeaponConfig::default(),
            secondary_attacks: vec![
                ThrowConfig::new("Arm", 20, 5),
                ThrowConfig::new("Rock", 10, 3),
            ],
            opening_move: (5, 5),
        }
    }
}

impl ZombieConfig {
    /// Builds the zombie without narrating; the opening move is left to the
    /// caller so it can be narrated.
    pub fn build(&self) -> Zombie {
        let mut zombie = Zombie::with_weapon(&self.name, self.hit_points, self.weapon.build());
        for attack in &self.secondary_attacks {
            zombie.add_secondary_attack(attack.build());
        }
        zombie
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DemoConfig {
    pub original: ZombieConfig,
    pub copy_name: String,
    /// Power written to the copy's weapon to show (or disprove) sharing.
    pub buffed_power: i32,
    pub copy_move: (i32, i32),
    pub extra_attack: ThrowConfig,
}

impl Default for DemoConfig {
    fn default() -> Self {
        DemoConfig {
            original: ZombieConfig::default(),
            copy_name: "Karen".to_string(),
            buffed_power: 30,
            copy_move: (10, 10),
            extra_attack: ThrowConfig::new("Spit", 5, 2),
        }
    }
}

impl DemoConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: DemoConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "loaded demo config");
        Self::from_toml_str(&content)
    }

    /// Reads the file named by `ZOMBIE_DEMO_CONFIG`, or the built-in scenario
    /// when the variable is unset.
    pub fn load_from_env() -> Result<Self, ConfigError> {
        match env::var_os(CONFIG_ENV_VAR) {
            Some(path) => {
                info!(path = ?path, var = CONFIG_ENV_VAR, "using demo config from environment");
                Self::from_file(Path::new(&path))
            }
            None => Ok(Self::default()),
        }
    }

    /// Checks every field. One problem is returned as `Invalid`, several as
    /// `Multiple` holding all of them.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut problems = ValidationErrors::new();
        let original = &self.original;

        if original.name.trim().is_empty() {
            problems.add(ConfigError::invalid("original.name", "must not be empty"));
        }
        if self.copy_name.trim().is_empty() {
            problems.add(ConfigError::invalid("copy_name", "must not be empty"));
        }
        if original.hit_points <= 0 {
            problems.add(ConfigError::invalid(
                "original.hit_points",
                format!("must be positive, got {}", original.hit_points),
            ));
        }
        if original.weapon.power <= 0 {
            problems.add(ConfigError::invalid(
                "original.weapon.power",
                format!("must be positive, got {}", original.weapon.power),
            ));
        }
        if original.weapon.reach <= 0 {
            problems.add(ConfigError::invalid(
                "original.weapon.reach",
                format!("must be positive, got {}", original.weapon.reach),
            ));
        }
        if self.buffed_power <= 0 {
            problems.add(ConfigError::invalid(
                "buffed_power",
                format!("must be positive, got {}", self.buffed_power),
            ));
        }

        let attacks = original
            .secondary_attacks
            .iter()
            .enumerate()
            .map(|(index, attack)| (format!("original.secondary_attacks[{index}]"), attack))
            .chain(std::iter::once(("extra_attack".to_string(), &self.extra_attack)));
        for (field, attack) in attacks {
            if attack.power <= 0 {
                problems.add(ConfigError::invalid(
                    format!("{field}.power"),
                    format!("must be positive, got {}", attack.power),
                ));
            }
            if attack.cooldown < 0 {
                problems.add(ConfigError::invalid(
                    format!("{field}.cooldown"),
                    format!("must not be negative, got {}", attack.cooldown),
                ));
            }
        }

        if problems.has_errors() {
            debug!(count = problems.count(), "demo config rejected");
        }
        problems.into_result(())
    }
}
