// Alias binding: two names, one zombie. This is the failure mode, not a copy.

use std::cell::{Ref, RefCell, RefMut};
use std::rc::Rc;

use tracing::trace;

use crate::narration::Narrator;
use crate::zombie::Zombie;

/// A name bound to zombie storage. Every handle produced by [`bind`] refers
/// to the same zombie, so a mutation through one is seen through all.
///
/// No `Clone` impl: `bind` is the only way to get a second handle.
///
/// [`bind`]: ZombieHandle::bind
#[derive(Debug)]
pub struct ZombieHandle {
    inner: Rc<RefCell<Zombie>>,
}

impl ZombieHandle {
    pub fn new(zombie: Zombie) -> Self {
        ZombieHandle {
            inner: Rc::new(RefCell::new(zombie)),
        }
    }

    /// Binds another name to this zombie.
    pub fn bind(&self) -> ZombieHandle {
        trace!(
            bindings = Rc::strong_count(&self.inner) + 1,
            "bound alias"
        );
        ZombieHandle {
            inner: Rc::clone(&self.inner),
        }
    }

    /// Identity comparison, not field comparison.
    pub fn is_same(&self, other: &ZombieHandle) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    /// Number of names currently bound to this zombie.
    pub fn binding_count(&self) -> usize {
        Rc::strong_count(&self.inner)
    }

    pub fn borrow(&self) -> Ref<'_, Zombie> {
        self.inner.borrow()
    }

    pub fn borrow_mut(&self) -> RefMut<'_, Zombie> {
        self.inner.borrow_mut()
    }

    pub fn set_name(&self, name: impl Into<String>) {
        self.inner.borrow_mut().set_name(name);
    }

    pub fn name(&self) -> String {
        self.inner.borrow().name().to_string()
    }

    /// Hits `target` for this zombie's current weapon power. `target` may be
    /// an alias of `self`; the attacker's borrow ends before damage lands.
    pub fn attack(&self, target: &ZombieHandle, narrator: &mut impl Narrator) {
        let (attacker, kind, power) = {
            let zombie = self.inner.borrow();
            let weapon = zombie.weapon();
            (zombie.name().to_string(), weapon.kind().to_string(), weapon.power())
        };
        narrator.narrate(&format!(
            "{attacker} attacks {} with {kind}",
            target.name()
        ));
        target.inner.borrow_mut().take_damage(power, narrator);
    }

    /// An independent zombie with the aliased zombie's current state.
    pub fn deep_copy(&self) -> Zombie {
        self.inner.borrow().deep_copy()
    }
}
