/// Convert a 0-10 catalog rating to 0-5 stars.
///
/// Half-stars round up: 8.7 and 8.5 both become 5, 7.0 becomes 4. A raw
/// rating of zero (or anything non-positive) means "no rating" and stays 0.
pub(crate) fn to_stars(raw: f64) -> i32 {
    if raw > 0.0 {
        ((raw / 2.0).ceil() as i32).min(5)
    } else {
        0
    }
}
