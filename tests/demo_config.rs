// Config file loading and the demonstrations driven by a custom scenario.

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use zombie_copy_demo::demo;
use zombie_copy_demo::{ConfigError, DemoConfig, RecordingNarrator};

#[test]
fn test_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
copy_name = "Eve"
buffed_power = 50
copy_move = [1, -1]

[original]
name = "Zed"
hit_points = 60
opening_move = [2, 3]
secondary_attacks = [{{ projectile = "Skull", power = 8, cooldown = 4 }}]

[original.weapon]
kind = "Claw"
power = 12
reach = 2

[extra_attack]
projectile = "Bone"
power = 6
cooldown = 1
"#
    )
    .unwrap();

    let config = DemoConfig::from_file(file.path()).unwrap();
    assert_eq!(config.original.name, "Zed");
    assert_eq!(config.copy_name, "Eve");

    let mut narrator = RecordingNarrator::new();
    let report = demo::run_all(&config, &mut narrator);

    assert!(report.alias.same_object);
    assert_eq!(report.alias.original_after.name, "Eve");

    assert!(report.shallow.shares_weapon);
    assert_eq!(report.shallow.original_weapon_after.power(), 50);

    let deep = &report.deep;
    assert!(!deep.shares_weapon);
    assert_eq!(deep.original_weapon_after.power(), 12);
    assert_eq!(deep.copy_weapon_after.power(), 50);
    assert_eq!(deep.original_position, (2, 3));
    assert_eq!(deep.copy_position, (3, 2));
    assert_eq!(deep.original_attack_count, 1);
    assert_eq!(deep.copy_attack_count, 2);
    // Zed hits Eve for 12, Eve hits Zed for 50
    assert_eq!(deep.copy_final.hit_points, 48);
    assert_eq!(deep.original_final.hit_points, 10);
    assert!(narrator.contains("Eve attacks Zed with Claw"));
}

#[test]
fn test_missing_file() {
    let err = DemoConfig::from_file(Path::new("/definitely/not/here.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::Read { .. }));
    assert!(err.to_string().contains("/definitely/not/here.toml"));
}

#[test]
fn test_malformed_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "copy_name = ").unwrap();

    let err = DemoConfig::from_file(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn test_default_scenario_report() {
    let mut narrator = RecordingNarrator::new();
    let report = demo::run_all(&DemoConfig::default(), &mut narrator);

    assert_eq!(report.deep.original_initial.position, (5, 5));
    assert_eq!(report.deep.copy_initial.name, "Karen");
    assert_eq!(report.deep.copy_initial.weapon, report.deep.original_initial.weapon);
    assert_eq!(
        report.deep.copy_initial.secondary_attacks,
        report.deep.original_initial.secondary_attacks
    );
    assert!(narrator.contains("=== COMBAT SIMULATION ==="));
}
