//! Default TOML engine config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# daytint engine configuration
# Only override what you want to change -- missing fields use defaults.

[schedule]
# Segment table for time-sync mode: a built-in name or a path to a YAML file.
#   four-segment: morning 5-12, midday 12-18, night 18-23, midnight 23-5
#   five-segment: morning 5-10, midday 10-16, evening 16-19, night 19-23, midnight 23-5
# name = "four-segment"
# How time-sync output is shaped: "three-stop" gradient or a "flat" color.
# time_sync_style = "three-stop"

[tick]
# interval_ms = 1000     # 100-60000

[store]
# Directory holding the settings record. Empty = platform default.
# directory = ""
# key = "backgroundSettings"

[logging]
# level = "info"         # trace, debug, info, warn, error
"##
    .to_string()
}
