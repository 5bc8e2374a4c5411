//! Shared angle helpers.

/// Normalize an angle to [0, 360) degrees.
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg % 360.0;
    if r < 0.0 { r + 360.0 } else { r }
}

/// Render an angle as degrees, arcminutes, and arcseconds, rounded to
/// the nearest arcsecond.
pub fn format_dms(deg: f64) -> String {
    let total_seconds = (deg.abs() * 3600.0).round() as u64;
    let d = total_seconds / 3600;
    let m = (total_seconds / 60) % 60;
    let s = total_seconds % 60;
    let sign = if deg < 0.0 && total_seconds > 0 { "-" } else { "" };
    format!("{sign}{d}\u{00b0}{m:02}\u{2032}{s:02}\u{2033}")
}
