use crate::score::Score;

/// Net score for a hole: gross strokes less any handicap strokes received.
/// `None` unless the cell holds a real score.
pub fn net_score(gross: Score, strokes_received: u8) -> Option<i32> {
    gross
        .strokes()
        .map(|g| i32::from(g) - i32::from(strokes_received))
}

/// Net score used when comparing fourball cards. A card without a real
/// score never beats one with a score.
pub(crate) fn net_or_infinite(gross: Score, strokes_received: u8) -> f64 {
    net_score(gross, strokes_received).map_or(f64::INFINITY, f64::from)
}
