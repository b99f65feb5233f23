// Integration tests for the alias / shallow / deep copy contracts.

use zombie_copy_demo::{
    RecordingNarrator, SharedZombie, SilentNarrator, Throw, Weapon, Zombie, ZombieHandle,
    ZombieSnapshot,
};

fn bob() -> Zombie {
    let mut bob = Zombie::with_weapon("Bob", 100, Weapon::new("Bite", 15, 1));
    bob.add_secondary_attack(Throw::new("Arm", 20, 5));
    bob.add_secondary_attack(Throw::new("Rock", 10, 3));
    bob
}

// ============================================================================
// Alias binding
// ============================================================================

#[test]
fn test_alias_identity_and_shared_mutation() {
    let a = ZombieHandle::new(bob());
    let b = a.bind();

    assert!(a.is_same(&b));
    assert!(b.is_same(&a));

    b.set_name("Karen");
    assert_eq!(a.name(), "Karen");

    b.borrow_mut().weapon_mut().set_power(42).unwrap();
    assert_eq!(a.borrow().weapon().power(), 42);
}

// ============================================================================
// Shallow copy
// ============================================================================

#[test]
fn test_shallow_copy_weapon_sharing() {
    let a = SharedZombie::from_zombie(bob());
    let b = SharedZombie::shallow_copy(&a);

    assert!(b.shares_weapon_with(&a));
    b.weapon_mut().set_power(30).unwrap();
    assert_eq!(a.weapon().power(), 30);
}

#[test]
fn test_shallow_copy_primitive_independence() {
    let a = SharedZombie::from_zombie(bob());
    let mut b = SharedZombie::shallow_copy(&a);

    b.set_name("X");
    assert_eq!(a.name(), "Bob");
    assert_eq!(b.name(), "X");
}

#[test]
fn test_shallow_copy_attack_list_sharing() {
    let a = SharedZombie::from_zombie(bob());
    let b = SharedZombie::shallow_copy(&a);

    assert!(b.shares_attacks_with(&a));
    b.add_secondary_attack(Throw::new("Spit", 5, 2));
    assert_eq!(a.secondary_attacks().len(), 3);
    assert_eq!(a.secondary_attacks()[2], Throw::new("Spit", 5, 2));
}

// ============================================================================
// Deep copy
// ============================================================================

#[test]
fn test_deep_copy_storage_is_distinct() {
    let a = bob();
    let b = a.deep_copy();

    assert!(!a.shares_weapon_with(&b));
    assert!(!a.shares_attacks_with(&b));
    for (left, right) in a.secondary_attacks().iter().zip(b.secondary_attacks()) {
        assert!(!std::ptr::eq(left, right));
    }
}

#[test]
fn test_deep_copy_of_unarmed_zombie_owns_its_storage() {
    let a = Zombie::new("Bob", 100);
    let mut b = a.deep_copy();

    assert!(!b.shares_attacks_with(&a));
    assert!(!b.shares_weapon_with(&a));

    b.add_secondary_attack(Throw::new("Spit", 5, 2));
    assert!(a.secondary_attacks().is_empty());
    assert_eq!(b.secondary_attacks().len(), 1);
}

#[test]
fn test_attack_through_alias_hits_the_same_zombie() {
    let a = ZombieHandle::new(bob());
    let b = a.bind();

    a.attack(&b, &mut SilentNarrator);
    assert_eq!(b.borrow().hit_points(), 85);
    assert_eq!(a.borrow().hit_points(), 85);
}

#[test]
fn test_deep_copy_value_equality_at_creation() {
    let mut a = bob();
    a.move_by(5, 5, &mut SilentNarrator);
    let b = a.deep_copy();

    assert_eq!(b.weapon().kind(), a.weapon().kind());
    assert_eq!(b.weapon().power(), a.weapon().power());
    assert_eq!(b.weapon().reach(), a.weapon().reach());
    assert_eq!(b.secondary_attacks(), a.secondary_attacks());
    assert_eq!(ZombieSnapshot::from(&b), ZombieSnapshot::from(&a));
}

#[test]
fn test_deep_copy_mutating_copy_leaves_original() {
    let a = bob();
    let before = ZombieSnapshot::from(&a);
    let mut b = a.deep_copy();

    b.set_name("Karen");
    b.weapon_mut().set_power(30).unwrap();
    b.weapon_mut().set_kind("Claw");
    b.move_by(3, 4, &mut SilentNarrator);
    b.add_secondary_attack(Throw::new("Spit", 5, 2));
    b.take_damage(50, &mut SilentNarrator);

    assert_eq!(ZombieSnapshot::from(&a), before);
}

#[test]
fn test_deep_copy_mutating_original_leaves_copy() {
    let mut a = bob();
    let b = a.deep_copy();
    let before = ZombieSnapshot::from(&b);

    a.set_name("Bobby");
    a.weapon_mut().set_reach(4).unwrap();
    a.move_by(-1, -1, &mut SilentNarrator);
    a.add_secondary_attack(Throw::new("Spit", 5, 2));

    assert_eq!(ZombieSnapshot::from(&b), before);
}

// ============================================================================
// Damage and validation
// ============================================================================

#[test]
fn test_damage_clamps_at_zero() {
    let mut zombie = Zombie::new("Bob", 30);
    zombie.take_damage(30, &mut SilentNarrator);
    assert_eq!(zombie.hit_points(), 0);

    let mut zombie = Zombie::new("Bob", 30);
    zombie.take_damage(31, &mut SilentNarrator);
    assert_eq!(zombie.hit_points(), 0);
}

#[test]
fn test_setter_validation_is_a_no_op() {
    let mut weapon = Weapon::new("Bite", 15, 1);
    assert!(weapon.set_power(0).is_err());
    assert!(weapon.set_power(-3).is_err());
    assert!(weapon.set_reach(-1).is_err());
    assert!(weapon.set_reach(0).is_err());
    assert_eq!(weapon, Weapon::new("Bite", 15, 1));

    let mut throw = Throw::new("Arm", 20, 5);
    assert!(throw.set_power(-20).is_err());
    assert!(throw.set_cooldown(-5).is_err());
    assert_eq!(throw, Throw::new("Arm", 20, 5));
}

// ============================================================================
// Scenario
// ============================================================================

#[test]
fn test_bob_and_karen_scenario() {
    let mut narrator = RecordingNarrator::new();

    let mut bob = bob();
    bob.move_by(5, 5, &mut narrator);
    assert_eq!(bob.position(), (5, 5));

    let mut karen = bob.deep_copy();
    karen.set_name("Karen");

    karen.weapon_mut().set_power(30).unwrap();
    assert_eq!(bob.weapon().power(), 15);

    karen.move_by(10, 10, &mut narrator);
    assert_eq!(karen.position(), (15, 15));
    assert_eq!(bob.position(), (5, 5));

    karen.add_secondary_attack(Throw::new("Spit", 5, 2));
    assert_eq!(karen.secondary_attacks().len(), 3);
    assert_eq!(bob.secondary_attacks().len(), 2);

    assert_eq!(
        narrator.lines(),
        &[
            "Bob moves to position (5, 5)".to_string(),
            "Karen moves to position (15, 15)".to_string(),
        ]
    );
}
