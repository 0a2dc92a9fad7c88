//! Schedule (segment table) lookup.
//!
//! Two tables ship built in. Custom tables are YAML files:
//!
//! ```yaml
//! name: late-riser
//! segments:
//!   - { name: morning,  start_hour: 7,  end_hour: 13, from: morning,  to: midday }
//!   - { name: midday,   start_hour: 13, end_hour: 19, from: midday,   to: night }
//!   - { name: night,    start_hour: 19, end_hour: 24, from: night,    to: midnight }
//!   - { name: midnight, start_hour: 24, end_hour: 31, from: midnight, to: morning }
//! ```

mod loader;

pub use loader::{load_schedule, load_schedule_from_path};

use crate::schema::Schedule;

/// Built-in schedule names.
pub const BUILT_IN_SCHEDULES: &[&str] = &["four-segment", "five-segment"];

/// Return a built-in schedule by name.
pub fn builtin(name: &str) -> Option<Schedule> {
    match name {
        "four-segment" => Some(Schedule::four_segment()),
        "five-segment" => Some(Schedule::five_segment()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::AnchorColor;

    #[test]
    fn built_in_schedules_list_has_expected_entries() {
        assert_eq!(BUILT_IN_SCHEDULES, &["four-segment", "five-segment"]);
        for name in BUILT_IN_SCHEDULES {
            let schedule = load_schedule(name).unwrap();
            assert_eq!(schedule.name, *name);
        }
    }

    #[test]
    fn built_in_schedules_validate() {
        for name in BUILT_IN_SCHEDULES {
            let schedule = builtin(name).unwrap();
            assert!(crate::validation::validate_schedule(&schedule).is_ok(), "{name}");
        }
    }

    #[test]
    fn load_schedule_from_yaml_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("late-riser.yaml");
        std::fs::write(
            &path,
            r#"
name: late-riser
segments:
  - { name: morning, start_hour: 7, end_hour: 13, from: morning, to: midday }
  - { name: midday, start_hour: 13, end_hour: 19, from: midday, to: night }
  - { name: night, start_hour: 19, end_hour: 24, from: night, to: midnight }
  - { name: midnight, start_hour: 24, end_hour: 31, from: midnight, to: morning }
"#,
        )
        .unwrap();

        let schedule = load_schedule(path.to_str().unwrap()).unwrap();
        assert_eq!(schedule.name, "late-riser");
        assert_eq!(schedule.segments.len(), 4);
        assert_eq!(schedule.day_start(), 7);
        assert_eq!(schedule.segments[3].to, AnchorColor::Morning);
    }

    #[test]
    fn load_schedule_rejects_gapped_table() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gapped.yaml");
        std::fs::write(
            &path,
            r#"
name: gapped
segments:
  - { name: day, start_hour: 6, end_hour: 12, from: morning, to: midday }
  - { name: night, start_hour: 13, end_hour: 30, from: night, to: morning }
"#,
        )
        .unwrap();

        let err = load_schedule_from_path(&path).unwrap_err();
        assert!(matches!(err, daytint_common::ConfigError::ValidationError(_)));
    }

    #[test]
    fn load_schedule_rejects_bad_yaml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.yaml");
        std::fs::write(&path, "segments: [ {").unwrap();

        let err = load_schedule_from_path(&path).unwrap_err();
        assert!(matches!(err, daytint_common::ConfigError::ParseError(_)));
    }

    #[test]
    fn nonexistent_schedule_returns_error() {
        let result = load_schedule("definitely-not-a-real-schedule");
        assert!(matches!(
            result,
            Err(daytint_common::ConfigError::FileNotFound(_))
        ));
    }
}
