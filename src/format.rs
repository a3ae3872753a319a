//! Human-readable rendering of distances and durations.

/// Format a distance in kilometers for display.
///
/// Short hops render in meters, mid-range distances keep one decimal,
/// anything from 10 km up is rounded to whole kilometers.
pub fn format_distance(km: f64) -> String {
    if km < 1.0 {
        format!("{} m", (km * 1000.0).round() as i64)
    } else if km < 10.0 {
        format!("{} km", (km * 10.0).round() / 10.0)
    } else {
        format!("{} km", km.round() as i64)
    }
}

/// Format a duration in minutes for display, switching to hours past 60.
pub fn format_time(minutes: f64) -> String {
    let minutes = minutes.round() as i64;
    if minutes < 60 {
        return format!("{} min", minutes);
    }

    let hours = minutes / 60;
    let remainder = minutes % 60;
    if remainder == 0 {
        format!("{} h", hours)
    } else {
        format!("{} h {} min", hours, remainder)
    }
}
