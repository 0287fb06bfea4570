use super::domain::{Finding, Level};

pub(crate) const MIN_SKIN_SCORE: f64 = 40.0;
pub(crate) const MAX_SKIN_SCORE: f64 = 100.0;

/// One row of a descending threshold table: scores at or above `minimum` map to the finding.
pub(crate) struct Band {
    pub minimum: f64,
    pub finding: Finding,
}

const fn band(minimum: f64, level: Level, severity: u8) -> Band {
    Band {
        minimum,
        finding: Finding::new(level, severity),
    }
}

pub(crate) const ACNE_BANDS: [Band; 3] = [
    band(80.0, Level::None, 0),
    band(70.0, Level::Mild, 30),
    band(55.0, Level::Moderate, 60),
];
pub(crate) const ACNE_FLOOR: Finding = Finding::new(Level::Severe, 85);

pub(crate) const PORES_BANDS: [Band; 3] = [
    band(75.0, Level::None, 0),
    band(65.0, Level::Mild, 35),
    band(50.0, Level::Moderate, 65),
];
pub(crate) const PORES_FLOOR: Finding = Finding::new(Level::Severe, 90);

pub(crate) const DARK_CIRCLE_BANDS: [Band; 3] = [
    band(75.0, Level::None, 0),
    band(65.0, Level::Mild, 35),
    band(50.0, Level::Moderate, 65),
];
pub(crate) const DARK_CIRCLE_FLOOR: Finding = Finding::new(Level::Severe, 90);

/// First band whose minimum the score reaches, else the floor.
pub(crate) fn classify(score: f64, bands: &[Band], floor: Finding) -> Finding {
    bands
        .iter()
        .find(|band| score >= band.minimum)
        .map(|band| band.finding)
        .unwrap_or(floor)
}

/// Boost low and mid provider scores. NaN counts as zero; infinities fall through to the clamps.
pub(crate) fn normalize(beauty_score: f64) -> f64 {
    let score = if beauty_score.is_nan() {
        0.0
    } else {
        beauty_score
    };

    if score < 60.0 {
        score * 1.3
    } else if score < 75.0 {
        score * 1.15
    } else {
        score
    }
}

/// Penalty applied to the overall skin score only.
pub(crate) fn age_adjustment(age: u32) -> f64 {
    if age > 50 {
        -5.0
    } else if age > 40 {
        -3.0
    } else {
        0.0
    }
}

/// Penalty applied to the score used for dark circles.
pub(crate) fn dark_circle_adjustment(age: u32) -> f64 {
    if age > 35 {
        -5.0
    } else {
        0.0
    }
}

pub(crate) fn skin_score(normalized_score: f64, age: u32) -> u8 {
    (normalized_score + age_adjustment(age))
        .round()
        .clamp(MIN_SKIN_SCORE, MAX_SKIN_SCORE) as u8
}
