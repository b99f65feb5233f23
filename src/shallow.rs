// Pattern: shared handles. `SharedZombie` keeps its weapon and throws behind
// `Rc<RefCell<_>>` so a shallow copy can point at the source's storage.
// Only the shallow-copy demonstration uses this type.

use std::cell::{Ref, RefCell, RefMut};
use std::fmt;
use std::rc::Rc;

use tracing::debug;

use crate::error::StatError;
use crate::narration::Narrator;
use crate::throw::Throw;
use crate::weapon::Weapon;
use crate::zombie::{Vitals, Zombie};

#[derive(Debug)]
pub struct SharedZombie {
    vitals: Vitals,
    weapon: Rc<RefCell<Weapon>>,
    secondary_attacks: Rc<RefCell<Vec<Throw>>>,
}

impl SharedZombie {
    /// Moves an owned zombie's weapon and throws into fresh shared handles.
    pub fn from_zombie(zombie: Zombie) -> Self {
        let (vitals, weapon, secondary_attacks) = zombie.into_parts();
        SharedZombie {
            vitals,
            weapon: Rc::new(RefCell::new(weapon)),
            secondary_attacks: Rc::new(RefCell::new(secondary_attacks)),
        }
    }

    /// Copies name, hit points and position by value, but hands out the
    /// source's own weapon and attack-list storage.
    pub fn shallow_copy(source: &SharedZombie) -> SharedZombie {
        debug!(zombie = %source.vitals.name, "shallow copy");
        SharedZombie {
            vitals: source.vitals.clone(),
            weapon: Rc::clone(&source.weapon),
            secondary_attacks: Rc::clone(&source.secondary_attacks),
        }
    }

    /// Detaches into an owned zombie with copies of the current weapon and
    /// throws.
    pub fn deep_copy(&self) -> Zombie {
        Zombie::from_parts(
            self.vitals.clone(),
            self.weapon.borrow().clone(),
            self.secondary_attacks.borrow().clone(),
        )
    }

    pub fn shares_weapon_with(&self, other: &SharedZombie) -> bool {
        Rc::ptr_eq(&self.weapon, &other.weapon)
    }

    pub fn shares_attacks_with(&self, other: &SharedZombie) -> bool {
        Rc::ptr_eq(&self.secondary_attacks, &other.secondary_attacks)
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

    pub fn set_hit_points(&mut self, hit_points: i32) -> Result<(), StatError> {
        self.vitals.set_hit_points(hit_points)
    }

    pub fn weapon(&self) -> Ref<'_, Weapon> {
        self.weapon.borrow()
    }

    /// Mutable access to the weapon storage, which may be shared.
    ///
    /// Panics if any zombie sharing this weapon already holds a guard from
    /// `weapon()` or `weapon_mut()`. While the guard is alive, `Display` for
    /// every sharer prints the weapon as `<in use>`.
    pub fn weapon_mut(&self) -> RefMut<'_, Weapon> {
        self.weapon.borrow_mut()
    }

    pub fn secondary_attacks(&self) -> Ref<'_, Vec<Throw>> {
        self.secondary_attacks.borrow()
    }

    /// Appends to the attack list, which may be shared.
    pub fn add_secondary_attack(&self, attack: Throw) {
        self.secondary_attacks.borrow_mut().push(attack);
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

    pub fn attack(&self, target: &mut SharedZombie, narrator: &mut impl Narrator) {
        let (kind, power) = {
            let weapon = self.weapon.borrow();
            (weapon.kind().to_string(), weapon.power())
        };
        narrator.narrate(&format!(
            "{} attacks {} with {}",
            self.vitals.name,
            target.name(),
            kind
        ));
        target.take_damage(power, narrator);
    }
}

impl fmt::Display for SharedZombie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let attack_count = self.secondary_attacks.borrow().len();
        match self.weapon.try_borrow() {
            Ok(weapon) => self.vitals.describe(f, &*weapon, attack_count),
            Err(_) => self.vitals.describe(f, &"<in use>", attack_count),
        }
    }
}
