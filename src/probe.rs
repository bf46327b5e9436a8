//! User-agent parsing and the support gate for the effect.

use lazy_static::lazy_static;
use regex::Regex;

/// Firefox before this version throws from `putImageData` when drawing to a
/// smaller canvas (Mozilla bug 564332).
pub const MIN_FIREFOX_VERSION: f64 = 11.0;

/// Separator between engine name and version: `/` or a single whitespace
/// character as browsers define it (includes U+FEFF, excludes U+0085).
const SEPARATOR: &str =
    r"[/\t\n\x0B\x0C\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}]";
/// `major.minor`, ASCII digits only; later components are not captured.
const VERSION: &str = r"([0-9]+\.[0-9]+)";

lazy_static! {
    static ref RE_FIREFOX: Regex = version_regex("Firefox").unwrap();
}

fn version_regex(engine: &str) -> Result<Regex, regex::Error> {
    Regex::new(&format!("{}{SEPARATOR}{VERSION}", regex::escape(engine)))
}

fn capture_version(re: &Regex, user_agent: &str) -> Option<f64> {
    re.captures(user_agent)?.get(1)?.as_str().parse().ok()
}

/// Version following `engine` in a user-agent string.
///
/// Accepts `Name/major.minor` or `Name major.minor`; anything after the minor
/// digits is ignored, so `Firefox/12.0.1` reads as `12.0`.
pub fn engine_version(user_agent: &str, engine: &str) -> Option<f64> {
    let re = version_regex(engine).ok()?;
    capture_version(&re, user_agent)
}

pub fn firefox_version(user_agent: &str) -> Option<f64> {
    capture_version(&RE_FIREFOX, user_agent)
}

/// Whether the wave should run given canvas support and the Firefox version.
pub fn effect_supported(canvas: bool, firefox: Option<f64>) -> bool {
    canvas && firefox.map_or(true, |v| v >= MIN_FIREFOX_VERSION)
}
