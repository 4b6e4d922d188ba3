mod common;
use common::TestIdentity;

use rplanner::errors::AppError;
use rplanner::{Config, Session};

#[test]
fn test_session_opens_for_authenticated_user() {
    let identity = TestIdentity(Some("user-1".to_string()));
    let session = Session::open(&identity).expect("session");
    assert_eq!(session.user_id(), "user-1");
}

#[test]
fn test_session_refused_when_signed_out() {
    let identity = TestIdentity(None);
    assert!(matches!(
        Session::open(&identity),
        Err(AppError::NotAuthenticated)
    ));
}

#[test]
fn test_config_defaults() {
    let cfg = Config::default();
    assert_eq!(cfg.export_title, "Planner");
    assert_eq!(cfg.show_weekday, "None");
    assert!(cfg.default_location.is_empty());
    assert!(cfg.database.ends_with("rplanner.sqlite"));
}

#[test]
fn test_config_yaml_round_trip() {
    let cfg = Config {
        database: "/tmp/planner.sqlite".to_string(),
        default_location: "Office".to_string(),
        export_title: "Crew Planner".to_string(),
        show_weekday: "Short".to_string(),
    };

    let yaml = serde_yaml::to_string(&cfg).expect("serialize");
    let back: Config = serde_yaml::from_str(&yaml).expect("deserialize");

    assert_eq!(back.database, cfg.database);
    assert_eq!(back.default_location, "Office");
    assert_eq!(back.export_title, "Crew Planner");
    assert_eq!(back.show_weekday, "Short");
}

#[test]
fn test_config_missing_optional_fields_fall_back() {
    let yaml = "database: /tmp/planner.sqlite\n";
    let cfg: Config = serde_yaml::from_str(yaml).expect("deserialize");

    assert_eq!(cfg.database, "/tmp/planner.sqlite");
    assert_eq!(cfg.export_title, "Planner");
    assert_eq!(cfg.show_weekday, "None");
}
