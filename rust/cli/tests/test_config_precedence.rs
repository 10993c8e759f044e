use blackjack_cli::run;
use serial_test::serial;
use std::io::Write as _;

fn clear_env() {
    unsafe {
        std::env::remove_var("BLACKJACK_CONFIG");
        std::env::remove_var("BLACKJACK_SEED");
        std::env::remove_var("BLACKJACK_BET");
    }
}

fn cfg_json() -> serde_json::Value {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let code = run(["blackjack", "cfg"], &mut out, &mut err);
    assert_eq!(code, 0, "cfg failed: {}", String::from_utf8_lossy(&err));
    serde_json::from_slice(&out).expect("cfg output should be valid JSON")
}

#[test]
#[serial]
fn defaults_apply_without_file_or_env() {
    clear_env();

    let json = cfg_json();
    assert_eq!(json["starting_balance"]["value"], 1000);
    assert_eq!(json["starting_balance"]["source"], "default");
    assert_eq!(json["default_bet"]["value"], 5);
    assert_eq!(json["value_limit"]["value"], 21);
    assert_eq!(json["dealer_stop"]["value"], 17);
    assert_eq!(json["packs"]["value"], 10);
    assert_eq!(json["reset_when_remaining"]["value"], 1);
    assert_eq!(json["seed"]["value"], serde_json::Value::Null);
}

#[test]
#[serial]
fn file_values_override_defaults() {
    clear_env();

    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "starting_balance = 500").unwrap();
    writeln!(file, "seed = 9").unwrap();
    file.flush().unwrap();

    unsafe {
        std::env::set_var("BLACKJACK_CONFIG", file.path());
    }
    let json = cfg_json();
    clear_env();

    assert_eq!(json["starting_balance"]["value"], 500);
    assert_eq!(json["starting_balance"]["source"], "file");
    assert_eq!(json["seed"]["value"], 9);
    assert_eq!(json["seed"]["source"], "file");
    // untouched keys keep their defaults
    assert_eq!(json["packs"]["value"], 10);
    assert_eq!(json["packs"]["source"], "default");
}

#[test]
#[serial]
fn env_values_override_the_file() {
    clear_env();

    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "seed = 9").unwrap();
    writeln!(file, "default_bet = 50").unwrap();
    file.flush().unwrap();

    unsafe {
        std::env::set_var("BLACKJACK_CONFIG", file.path());
        std::env::set_var("BLACKJACK_SEED", "3");
        std::env::set_var("BLACKJACK_BET", "25");
    }
    let json = cfg_json();
    clear_env();

    assert_eq!(json["seed"]["value"], 3);
    assert_eq!(json["seed"]["source"], "env");
    assert_eq!(json["default_bet"]["value"], 25);
    assert_eq!(json["default_bet"]["source"], "env");
}

#[test]
#[serial]
fn invalid_env_values_fail_the_command() {
    clear_env();
    unsafe {
        std::env::set_var("BLACKJACK_BET", "plenty");
    }

    let mut out = Vec::new();
    let mut err = Vec::new();
    let code = run(["blackjack", "cfg"], &mut out, &mut err);
    clear_env();

    assert_eq!(code, 2);
    assert!(String::from_utf8(err).unwrap().contains("Invalid"));
}

#[test]
#[serial]
fn invalid_config_values_are_rejected() {
    clear_env();

    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "default_bet = 0").unwrap();
    file.flush().unwrap();

    unsafe {
        std::env::set_var("BLACKJACK_CONFIG", file.path());
    }
    let mut out = Vec::new();
    let mut err = Vec::new();
    let code = run(["blackjack", "cfg"], &mut out, &mut err);
    clear_env();

    assert_eq!(code, 2);
    assert!(String::from_utf8(err).unwrap().contains("default_bet"));
}
