//! Segment table validation: contiguous, non-empty, exactly one day long.

use crate::schema::{Schedule, MINUTES_PER_DAY};

pub(crate) fn validate_schedule(errors: &mut Vec<String>, schedule: &Schedule) {
    if schedule.name.trim().is_empty() {
        errors.push("schedule.name must not be empty".into());
    }

    let Some(first) = schedule.segments.first() else {
        errors.push("schedule.segments must not be empty".into());
        return;
    };

    if first.start_hour >= 24 {
        errors.push(format!(
            "schedule.segments[0] ({}) starts at hour {}, must be below 24",
            first.name, first.start_hour
        ));
    }

    let mut previous_end = first.start_hour;
    for (i, segment) in schedule.segments.iter().enumerate() {
        if segment.start_hour >= segment.end_hour {
            errors.push(format!(
                "schedule.segments[{i}] ({}) is empty: [{}, {})",
                segment.name, segment.start_hour, segment.end_hour
            ));
        }
        if segment.start_hour != previous_end {
            errors.push(format!(
                "schedule.segments[{i}] ({}) starts at {} but the previous segment ends at {}",
                segment.name, segment.start_hour, previous_end
            ));
        }
        previous_end = segment.end_hour;
    }

    let span_minutes = previous_end.saturating_sub(first.start_hour) * 60;
    if span_minutes != MINUTES_PER_DAY {
        errors.push(format!(
            "schedule '{}' spans {} hours, must span exactly 24",
            schedule.name,
            span_minutes / 60
        ));
    }
}
