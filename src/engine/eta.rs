const AVERAGE_SPEED_KMH: f64 = 30.0;
const PREP_TIME_MINUTES: f64 = 15.0;

/// Human-readable delivery time estimate for a given distance.
///
/// Travel time assumes a 30 km/h courier plus a fixed 15-minute prep window.
/// The range is `[t, ceil(1.3t)]` minutes; above an hour it switches to hour
/// granularity.
pub fn estimated_time_label(distance_km: f64) -> String {
    let travel_minutes = distance_km / AVERAGE_SPEED_KMH * 60.0;
    let lower = (travel_minutes + PREP_TIME_MINUTES).round() as u64;
    let upper = (lower as f64 * 1.3).ceil() as u64;

    if upper <= 60 {
        return format!("{lower}-{upper} min");
    }

    let lower_hours = hours(lower);
    let upper_hours = hours(upper);

    if lower_hours == upper_hours {
        format!("about {} {}", lower_hours, hour_word(lower_hours))
    } else {
        format!("{lower_hours}-{upper_hours} hours")
    }
}

fn hours(minutes: u64) -> u64 {
    ((minutes as f64 / 60.0).round() as u64).max(1)
}

fn hour_word(n: u64) -> &'static str {
    if n == 1 { "hour" } else { "hours" }
}

#[cfg(test)]
mod tests {
    use super::estimated_time_label;

    #[test]
    fn two_km_order_is_a_short_minute_range() {
        // travel 4 min + 15 prep = 19, upper ceil(19 * 1.3) = 25
        assert_eq!(estimated_time_label(2.0), "19-25 min");
    }

    #[test]
    fn zero_distance_still_includes_prep_time() {
        assert_eq!(estimated_time_label(0.0), "15-20 min");
    }

    #[test]
    fn long_distance_switches_to_hours() {
        // 30 km: travel 60 + 15 = 75, upper ceil(97.5) = 98 -> 1-2 hours
        assert_eq!(estimated_time_label(30.0), "1-2 hours");
    }

    #[test]
    fn equal_hour_bounds_collapse_to_about() {
        // 45 km: travel 90 + 15 = 105, upper ceil(136.5) = 137
        // both round to 2 hours
        assert_eq!(estimated_time_label(45.0), "about 2 hours");
    }
}
