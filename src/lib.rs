//! # Zombie Copy Demo
//!
//! Contrasts three ways of "copying" a zombie that owns a weapon and a list
//! of secondary attacks:
//!
//! 1. **Alias binding** - [`ZombieHandle::bind`] gives a second name to the
//!    same zombie. Renaming through one name renames both.
//! 2. **Shallow copy** - [`SharedZombie::shallow_copy`] copies name, hit
//!    points and position, but the weapon and attack list stay shared.
//! 3. **Deep copy** - [`Zombie::deep_copy`] duplicates everything. Nothing
//!    done to the copy is visible through the original.
//!
//! All narration goes through a [`Narrator`], so the demonstrations in
//! [`demo`] can run against [`RecordingNarrator`] in tests and
//! [`ConsoleNarrator`] from the binary.
//!
//! ```bash
//! cargo run --bin zombie_game
//! RUST_LOG=zombie_copy_demo=debug cargo run --bin zombie_game
//! ZOMBIE_DEMO_CONFIG=scenario.toml cargo run --bin zombie_game
//! ```

pub mod alias;
pub mod config;
pub mod demo;
pub mod error;
pub mod narration;
pub mod shallow;
pub mod snapshot;
pub mod throw;
pub mod weapon;
pub mod zombie;

pub use alias::ZombieHandle;
pub use config::DemoConfig;
pub use error::{ConfigError, StatError, ValidationErrors};
pub use narration::{ConsoleNarrator, Narrator, RecordingNarrator, SilentNarrator};
pub use shallow::SharedZombie;
pub use snapshot::ZombieSnapshot;
pub use throw::Throw;
pub use weapon::Weapon;
pub use zombie::Zombie;
