//! Shared validation helpers used by all domain validators.

/// Push an error if `value` is outside `[min, max]`.
pub(crate) fn validate_range(errors: &mut Vec<String>, name: &str, value: u32, min: u32, max: u32) {
    if value < min || value > max {
        errors.push(format!("{name} = {value} is out of range [{min}, {max}]"));
    }
}

/// Push an error if `value` is not one of `allowed` (case-insensitive).
pub(crate) fn validate_one_of(errors: &mut Vec<String>, name: &str, value: &str, allowed: &[&str]) {
    if !allowed.iter().any(|a| a.eq_ignore_ascii_case(value)) {
        errors.push(format!(
            "{name} = {value:?} is not one of {}",
            allowed.join(", ")
        ));
    }
}
