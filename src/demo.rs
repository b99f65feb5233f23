// The three demonstrations: alias binding, shallow copy, deep copy.
//
// Each one narrates through the supplied sink and returns a report with the
// states it showed, so callers can check the outcome without reading text.

use tracing::{info, warn};

use crate::alias::ZombieHandle;
use crate::config::DemoConfig;
use crate::error::StatError;
use crate::narration::Narrator;
use crate::shallow::SharedZombie;
use crate::snapshot::ZombieSnapshot;
use crate::weapon::Weapon;

const SEPARATOR_WIDTH: usize = 50;
const RULE_WIDTH: usize = 40;

// ============================================================================
// Reports
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasReport {
    pub created: ZombieSnapshot,
    pub original_after: ZombieSnapshot,
    pub alias_after: ZombieSnapshot,
    pub same_object: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShallowReport {
    pub original_initial: ZombieSnapshot,
    pub copy_initial: ZombieSnapshot,
    pub original_weapon_after: Weapon,
    pub copy_weapon_after: Weapon,
    pub shares_weapon: bool,
    pub shares_attacks: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeepReport {
    pub original_initial: ZombieSnapshot,
    pub copy_initial: ZombieSnapshot,
    pub original_weapon_after: Weapon,
    pub copy_weapon_after: Weapon,
    pub shares_weapon: bool,
    pub original_position: (i32, i32),
    pub copy_position: (i32, i32),
    pub original_attack_count: usize,
    pub copy_attack_count: usize,
    /// States after the closing combat exchange.
    pub original_final: ZombieSnapshot,
    pub copy_final: ZombieSnapshot,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoReport {
    pub alias: AliasReport,
    pub shallow: ShallowReport,
    pub deep: DeepReport,
}

// ============================================================================
// Demonstration 1: alias binding
// ============================================================================

pub fn demonstrate_alias_problem(config: &DemoConfig, narrator: &mut impl Narrator) -> AliasReport {
    narrator.narrate("DEMONSTRATION 1: Reference Copy Problem");
    narrator.narrate(&"-".repeat(RULE_WIDTH));

    let original = ZombieHandle::new(config.original.build());
    let alias = original.bind();
    let created = ZombieSnapshot::from(&*original.borrow());
    let original_name = created.name.clone();

    narrator.narrate(&format!("Created {original_name}: {created}"));
    narrator.narrate(&format!(
        "Attempted to copy {original_name} to {} by binding a second name",
        config.copy_name
    ));

    alias.set_name(&config.copy_name);

    let original_after = ZombieSnapshot::from(&*original.borrow());
    let alias_after = ZombieSnapshot::from(&*alias.borrow());
    let same_object = original.is_same(&alias);

    narrator.narrate("");
    narrator.narrate(&format!("After changing name to '{}':", config.copy_name));
    narrator.narrate(&format!("{original_name}: {original_after}"));
    narrator.narrate(&format!("{}: {alias_after}", config.copy_name));
    narrator.narrate(&format!("Are they the same object? {same_object}"));
    narrator.narrate(&format!("PROBLEM: {original_name}'s name also changed!"));

    info!(same_object, bindings = original.binding_count(), "alias demonstration done");
    AliasReport {
        created,
        original_after,
        alias_after,
        same_object,
    }
}

// ============================================================================
// Demonstration 2: shallow copy
// ============================================================================

pub fn demonstrate_shallow_copy_problem(
    config: &DemoConfig,
    narrator: &mut impl Narrator,
) -> ShallowReport {
    narrator.narrate("DEMONSTRATION 2: Shallow Copy Problem");
    narrator.narrate(&"-".repeat(RULE_WIDTH));

    let original = SharedZombie::from_zombie(config.original.build());
    let mut copy = SharedZombie::shallow_copy(&original);
    copy.set_name(&config.copy_name);
    let original_name = original.name().to_string();

    let original_initial = ZombieSnapshot::from(&original);
    let copy_initial = ZombieSnapshot::from(&copy);

    narrator.narrate(&format!("Created {original_name} with weapon and secondary attacks"));
    narrator.narrate(&format!("Created {} using shallow copy", config.copy_name));
    narrator.narrate("");
    narrator.narrate("Initial state:");
    narrator.narrate(&format!("{original_name}: {original_initial}"));
    narrator.narrate(&format!("{}: {copy_initial}", config.copy_name));

    narrator.narrate("");
    narrator.narrate(&format!(
        "Modifying {}'s weapon power to {}...",
        config.copy_name, config.buffed_power
    ));
    let buffed = copy.weapon_mut().set_power(config.buffed_power);
    log_rejection(buffed);

    let original_weapon_after = original.weapon().clone();
    let copy_weapon_after = copy.weapon().clone();
    let shares_weapon = copy.shares_weapon_with(&original);
    let shares_attacks = copy.shares_attacks_with(&original);

    narrator.narrate(&format!("{original_name}'s weapon: {original_weapon_after}"));
    narrator.narrate(&format!("{}'s weapon: {copy_weapon_after}", config.copy_name));
    narrator.narrate(&format!("PROBLEM: {original_name}'s weapon power also changed!"));
    narrator.narrate(&format!("Are weapons the same object? {shares_weapon}"));

    info!(shares_weapon, shares_attacks, "shallow copy demonstration done");
    ShallowReport {
        original_initial,
        copy_initial,
        original_weapon_after,
        copy_weapon_after,
        shares_weapon,
        shares_attacks,
    }
}

// ============================================================================
// Demonstration 3: deep copy
// ============================================================================

pub fn demonstrate_deep_copy_solution(
    config: &DemoConfig,
    narrator: &mut impl Narrator,
) -> DeepReport {
    narrator.narrate("DEMONSTRATION 3: Deep Copy Solution");
    narrator.narrate(&"-".repeat(RULE_WIDTH));

    let mut original = config.original.build();
    let (dx, dy) = config.original.opening_move;
    original.move_by(dx, dy, narrator);

    let mut copy = original.deep_copy();
    copy.set_name(&config.copy_name);
    let original_name = original.name().to_string();
    let copy_name = copy.name().to_string();

    let original_initial = ZombieSnapshot::from(&original);
    let copy_initial = ZombieSnapshot::from(&copy);

    narrator.narrate(&format!("Created {original_name} with weapon and secondary attacks"));
    narrator.narrate(&format!("Created {copy_name} using deep copy"));
    narrator.narrate("");
    narrator.narrate("Initial state:");
    narrator.narrate(&format!("{original_name}: {original_initial}"));
    narrator.narrate(&format!("{copy_name}: {copy_initial}"));

    narrator.narrate("");
    narrator.narrate(&format!(
        "Modifying {copy_name}'s weapon power to {}...",
        config.buffed_power
    ));
    log_rejection(copy.weapon_mut().set_power(config.buffed_power));

    let original_weapon_after = original.weapon().clone();
    let copy_weapon_after = copy.weapon().clone();
    let shares_weapon = copy.shares_weapon_with(&original);

    narrator.narrate(&format!("{original_name}'s weapon: {original_weapon_after}"));
    narrator.narrate(&format!("{copy_name}'s weapon: {copy_weapon_after}"));
    narrator.narrate(&format!("SUCCESS: {original_name}'s weapon remains unchanged!"));
    narrator.narrate(&format!("Are weapons the same object? {shares_weapon}"));

    narrator.narrate("");
    narrator.narrate(&format!("Moving {copy_name}..."));
    let (dx, dy) = config.copy_move;
    copy.move_by(dx, dy, narrator);
    let original_position = original.position();
    let copy_position = copy.position();
    narrator.narrate(&format!(
        "{original_name} position: ({}, {})",
        original_position.0, original_position.1
    ));
    narrator.narrate(&format!(
        "{copy_name} position: ({}, {})",
        copy_position.0, copy_position.1
    ));

    narrator.narrate("");
    narrator.narrate(&format!("Adding new secondary attack to {copy_name}..."));
    copy.add_secondary_attack(config.extra_attack.build());
    let original_attack_count = original.secondary_attacks().len();
    let copy_attack_count = copy.secondary_attacks().len();
    narrator.narrate(&format!(
        "{original_name}'s secondary attacks: {original_attack_count}"
    ));
    narrator.narrate(&format!("{copy_name}'s secondary attacks: {copy_attack_count}"));

    narrator.narrate("");
    narrator.narrate("=== COMBAT SIMULATION ===");
    original.attack(&mut copy, narrator);
    copy.attack(&mut original, narrator);

    info!(
        original_hp = original.hit_points(),
        copy_hp = copy.hit_points(),
        "deep copy demonstration done"
    );
    DeepReport {
        original_initial,
        copy_initial,
        original_weapon_after,
        copy_weapon_after,
        shares_weapon,
        original_position,
        copy_position,
        original_attack_count,
        copy_attack_count,
        original_final: ZombieSnapshot::from(&original),
        copy_final: ZombieSnapshot::from(&copy),
    }
}

/// Runs all three demonstrations in order with separators between them.
pub fn run_all(config: &DemoConfig, narrator: &mut impl Narrator) -> DemoReport {
    narrator.narrate("=== ZOMBIE GAME - Copy Semantics Demo ===");
    narrator.narrate("");

    let alias = demonstrate_alias_problem(config, narrator);
    separator(narrator);
    let shallow = demonstrate_shallow_copy_problem(config, narrator);
    separator(narrator);
    let deep = demonstrate_deep_copy_solution(config, narrator);

    DemoReport {
        alias,
        shallow,
        deep,
    }
}

fn separator(narrator: &mut impl Narrator) {
    narrator.narrate("");
    narrator.narrate(&"=".repeat(SEPARATOR_WIDTH));
    narrator.narrate("");
}

fn log_rejection(result: Result<(), StatError>) {
    if let Err(err) = result {
        warn!(field = err.field(), %err, "setter ignored value");
    }
}
