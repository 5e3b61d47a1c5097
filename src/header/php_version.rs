//! `Requires PHP` derivation from composer's `require.php` constraint.
use regex::Regex;
use std::sync::OnceLock;

/// Largest component a version may carry (2^53 - 1).
const MAX_SAFE_COMPONENT: u64 = 9_007_199_254_740_991;

/// First run of up to three dot-separated numbers not embedded in a longer
/// digit run.
#[allow(clippy::expect_used)]
fn coerce_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"(?:^|[^0-9])([0-9]{1,16})(?:\.([0-9]{1,16}))?(?:\.([0-9]{1,16}))?(?:$|[^0-9])")
            .expect("literal pattern compiles")
    })
}

/// Coerce a loose version string to `major.minor.patch`.
///
/// Missing parts default to zero; `None` when no number is found or a
/// component is too large.
///
/// # Examples
///
/// ```
/// use wp_main_file::header::php_version::coerce;
///
/// assert_eq!(coerce("^8.1").as_deref(), Some("8.1.0"));
/// assert_eq!(coerce(">=7.4 <9").as_deref(), Some("7.4.0"));
/// assert_eq!(coerce("*"), None);
/// ```
#[must_use]
pub fn coerce(constraint: &str) -> Option<String> {
    let caps = coerce_pattern().captures(constraint)?;
    let part = |i: usize| -> Option<u64> {
        caps.get(i)
            .map_or(Some(0), |m| m.as_str().parse::<u64>().ok())
            .filter(|&n| n <= MAX_SAFE_COMPONENT)
    };
    Some(format!("{}.{}.{}", part(1)?, part(2)?, part(3)?))
}

/// Derive the `Requires PHP` header value from a version constraint.
///
/// The constraint is coerced to `major.minor.patch`, then a single trailing
/// `.0` is dropped: `^8.1.0` gives `8.1`, `8.0.0` gives `8.0`, `8.1.2` stays.
#[must_use]
pub fn requires_php(constraint: &str) -> Option<String> {
    let version = coerce(constraint)?;
    Some(version.strip_suffix(".0").unwrap_or(&version).to_string())
}
