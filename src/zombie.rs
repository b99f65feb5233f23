// Pattern: owned composition. A `Zombie` owns its weapon and its throws by
// value, so the only way to get a second zombie is an explicit `deep_copy`.

use std::fmt;

use tracing::{debug, trace};

use crate::error::StatError;
use crate::narration::Narrator;
use crate::throw::Throw;
use crate::weapon::Weapon;

// ============================================================================
// Vitals: the primitive state every zombie flavour carries
// ============================================================================

/// Name, hit points and position. `Clone` copies every field by value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Vitals {
    pub(crate) name: String,
    pub(crate) hit_points: i32,
    pub(crate) max_hit_points: i32,
    pub(crate) x: i32,
    pub(crate) y: i32,
}

impl Vitals {
    pub(crate) fn new(name: String, hit_points: i32) -> Self {
        Vitals {
            name,
            hit_points,
            max_hit_points: hit_points,
            x: 0,
            y: 0,
        }
    }

    pub(crate) fn set_hit_points(&mut self, hit_points: i32) -> Result<(), StatError> {
        if !(0..=self.max_hit_points).contains(&hit_points) {
            return Err(StatError::OutOfRange {
                field: "hit_points",
                value: hit_points,
                min: 0,
                max: self.max_hit_points,
            });
        }
        self.hit_points = hit_points;
        Ok(())
    }

    // Clamps at zero only; there is no healing path that could push past max.
    pub(crate) fn take_damage(&mut self, damage: i32, narrator: &mut impl Narrator) {
        self.hit_points = self.hit_points.saturating_sub(damage).max(0);
        debug!(
            zombie = %self.name,
            damage,
            hit_points = self.hit_points,
            "took damage"
        );
        narrator.narrate(&format!(
            "{} takes {} damage. HP: {}/{}",
            self.name, damage, self.hit_points, self.max_hit_points
        ));
    }

    pub(crate) fn move_by(&mut self, dx: i32, dy: i32, narrator: &mut impl Narrator) {
        self.x = self.x.wrapping_add(dx);
        self.y = self.y.wrapping_add(dy);
        trace!(zombie = %self.name, x = self.x, y = self.y, "moved");
        narrator.narrate(&format!(
            "{} moves to position ({}, {})",
            self.name, self.x, self.y
        ));
    }

    pub(crate) fn describe(
        &self,
        f: &mut fmt::Formatter<'_>,
        weapon: &dyn fmt::Display,
        attack_count: usize,
    ) -> fmt::Result {
        write!(
            f,
            "Zombie[name={}, HP={}/{}, position=({},{}), weapon={}, secondaryAttacks={}]",
            self.name, self.hit_points, self.max_hit_points, self.x, self.y, weapon, attack_count
        )
    }
}

// ============================================================================
// Zombie
// ============================================================================

/// A zombie that exclusively owns its weapon and secondary attacks.
///
/// `Zombie` has no `Clone` impl. Copying goes through
/// [`Zombie::deep_copy`], aliasing through [`crate::ZombieHandle::bind`], and
/// storage sharing through [`crate::SharedZombie::shallow_copy`].
#[derive(Debug, PartialEq, Eq)]
pub struct Zombie {
    vitals: Vitals,
    weapon: Weapon,
    secondary_attacks: Vec<Throw>,
}

impl Zombie {
    /// A zombie armed with the default bite.
    pub fn new(name: impl Into<String>, hit_points: i32) -> Self {
        Zombie::with_weapon(name, hit_points, Weapon::bite())
    }

    /// Takes ownership of `weapon` as-is.
    pub fn with_weapon(name: impl Into<String>, hit_points: i32, weapon: Weapon) -> Self {
        Zombie {
            vitals: Vitals::new(name.into(), hit_points),
            weapon,
            secondary_attacks: Vec::new(),
        }
    }

    pub(crate) fn from_parts(vitals: Vitals, weapon: Weapon, secondary_attacks: Vec<Throw>) -> Self {
        Zombie {
            vitals,
            weapon,
            secondary_attacks,
        }
    }

    pub(crate) fn into_parts(self) -> (Vitals, Weapon, Vec<Throw>) {
        (self.vitals, self.weapon, self.secondary_attacks)
    }

    /// Fully independent copy: primitives by value, the weapon through its own
    /// copy, and a fresh attack list with every throw copied in order.
    pub fn deep_copy(&self) -> Zombie {
        let mut secondary_attacks = Vec::with_capacity(self.secondary_attacks.len());
        for throw in &self.secondary_attacks {
            secondary_attacks.push(throw.clone());
        }

        debug!(zombie = %self.vitals.name, attacks = secondary_attacks.len(), "deep copy");
        Zombie {
            vitals: self.vitals.clone(),
            weapon: self.weapon.clone(),
            secondary_attacks,
        }
    }

    pub fn name(&self) -> &str {
        &self.vitals.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.vitals.name = name.into();
    }

    pub fn hit_points(&self) -> i32 {
        self.vitals.hit_points
    }

    pub fn max_hit_points(&self) -> i32 {
        self.vitals.max_hit_points
    }

    /// Accepts `0..=max_hit_points`; anything else leaves hit points alone.
    pub fn set_hit_points(&mut self, hit_points: i32) -> Result<(), StatError> {
        self.vitals.set_hit_points(hit_points)
    }

    pub fn weapon(&self) -> &Weapon {
        &self.weapon
    }

    pub fn weapon_mut(&mut self) -> &mut Weapon {
        &mut self.weapon
    }

    pub fn set_weapon(&mut self, weapon: Weapon) {
        self.weapon = weapon;
    }

    pub fn secondary_attacks(&self) -> &[Throw] {
        &self.secondary_attacks
    }

    pub fn add_secondary_attack(&mut self, attack: Throw) {
        self.secondary_attacks.push(attack);
    }

    /// Identity of the weapon storage, not field equality.
    pub fn shares_weapon_with(&self, other: &Zombie) -> bool {
        std::ptr::eq(&self.weapon, &other.weapon)
    }

    // Compares the `Vec` headers: empty lists all hand out the same dangling
    // slice pointer, so comparing slices would report false sharing.
    pub fn shares_attacks_with(&self, other: &Zombie) -> bool {
        std::ptr::eq(&self.secondary_attacks, &other.secondary_attacks)
    }

    pub fn position(&self) -> (i32, i32) {
        (self.vitals.x, self.vitals.y)
    }

    pub fn move_by(&mut self, dx: i32, dy: i32, narrator: &mut impl Narrator) {
        self.vitals.move_by(dx, dy, narrator);
    }

    pub fn take_damage(&mut self, damage: i32, narrator: &mut impl Narrator) {
        self.vitals.take_damage(damage, narrator);
    }

    /// Hits `target` for this zombie's current weapon power.
    pub fn attack(&self, target: &mut Zombie, narrator: &mut impl Narrator) {
        narrator.narrate(&format!(
            "{} attacks {} with {}",
            self.vitals.name,
            target.name(),
            self.weapon.kind()
        ));
        target.take_damage(self.weapon.power(), narrator);
    }
}

impl fmt::Display for Zombie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.vitals
            .describe(f, &self.weapon, self.secondary_attacks.len())
    }
}
