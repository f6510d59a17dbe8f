//! Level progression derived from the cumulative score.
//!
//! Levels are a flat tier: every 1000 points is one level, starting at 0.

/// Points required for each level
pub const POINTS_PER_LEVEL: i64 = 1000;

/// Level reached with a given score (negative scores count as 0)
pub fn level_for_score(score: i64) -> i64 {
    score.max(0) / POINTS_PER_LEVEL
}

/// Minimum score needed to reach a level
pub fn score_for_level(level: i64) -> i64 {
    level.max(0).saturating_mul(POINTS_PER_LEVEL)
}

/// Points still needed to reach the next level
pub fn points_to_next_level(score: i64) -> i64 {
    score_for_level(level_for_score(score) + 1).saturating_sub(score.max(0))
}

/// Progress within the current level (0.0 to 1.0)
pub fn level_progress(score: i64) -> f32 {
    let into_level = score.max(0) - score_for_level(level_for_score(score));
    (into_level as f32 / POINTS_PER_LEVEL as f32).clamp(0.0, 1.0)
}
