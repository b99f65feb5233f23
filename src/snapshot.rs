use std::fmt;

use crate::shallow::SharedZombie;
use crate::throw::Throw;
use crate::weapon::Weapon;
use crate::zombie::Zombie;

/// Observable state of a zombie at one point in time. Owns copies of
/// everything, so later mutation of the zombie never shows up here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZombieSnapshot {
    pub name: String,
    pub hit_points: i32,
    pub max_hit_points: i32,
    pub position: (i32, i32),
    pub weapon: Weapon,
    pub secondary_attacks: Vec<Throw>,
}

impl From<&Zombie> for ZombieSnapshot {
    fn from(zombie: &Zombie) -> Self {
        ZombieSnapshot {
            name: zombie.name().to_string(),
            hit_points: zombie.hit_points(),
            max_hit_points: zombie.max_hit_points(),
            position: zombie.position(),
            weapon: zombie.weapon().clone(),
            secondary_attacks: zombie.secondary_attacks().to_vec(),
        }
    }
}

impl From<&SharedZombie> for ZombieSnapshot {
    fn from(zombie: &SharedZombie) -> Self {
        ZombieSnapshot {
            name: zombie.name().to_string(),
            hit_points: zombie.hit_points(),
            max_hit_points: zombie.max_hit_points(),
            position: zombie.position(),
            weapon: zombie.weapon().clone(),
            secondary_attacks: zombie.secondary_attacks().clone(),
        }
    }
}

impl fmt::Display for ZombieSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Zombie[name={}, HP={}/{}, position=({},{}), weapon={}, secondaryAttacks={}]",
            self.name,
            self.hit_points,
            self.max_hit_points,
            self.position.0,
            self.position.1,
            self.weapon,
            self.secondary_attacks.len()
        )
    }
}
