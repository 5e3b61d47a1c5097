//! Boolean coercion for string-valued CI inputs.

/// Values that coerce to `false` after trimming and lowercasing.
const FALSY: [&str; 7] = ["", "undefined", "null", "false", "0", "no", "off"];

/// Coerce a CI input string to a boolean.
///
/// An unset input is `false`. A set input is `false` only when its trimmed,
/// lowercased form is `""`, `undefined`, `null`, `false`, `0`, `no` or
/// `off`; anything else is `true`.
///
/// # Examples
///
/// ```
/// use wp_main_file::config::flags::parse_bool_input;
///
/// assert!(parse_bool_input(Some("1")));
/// assert!(parse_bool_input(Some(" yes ")));
/// assert!(!parse_bool_input(Some(" OFF ")));
/// assert!(!parse_bool_input(None));
/// ```
#[must_use]
pub fn parse_bool_input(value: Option<&str>) -> bool {
    value.is_some_and(|v| {
        let normalized = v.trim().to_lowercase();
        !FALSY.contains(&normalized.as_str())
    })
}
