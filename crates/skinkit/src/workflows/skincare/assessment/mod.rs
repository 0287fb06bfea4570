//! Derivation of a structured skin assessment from a provider beauty score and age.

mod bands;
mod domain;
mod rules;
mod signal;

pub use domain::{Concern, Finding, Level, RawSignal, SkinAssessment};
pub use signal::SignalError;

use bands::{
    classify, dark_circle_adjustment, normalize, skin_score, ACNE_BANDS, ACNE_FLOOR,
    DARK_CIRCLE_BANDS, DARK_CIRCLE_FLOOR, PORES_BANDS, PORES_FLOOR,
};
use rules::{evaluate_concerns, RuleContext};

/// Pure and total: out-of-range inputs are clamped, never rejected.
pub fn derive(signal: &RawSignal) -> SkinAssessment {
    let normalized_score = normalize(signal.beauty_score);
    let skin_score = skin_score(normalized_score, signal.age);

    let acne = classify(normalized_score, &ACNE_BANDS, ACNE_FLOOR);
    let pores = classify(normalized_score, &PORES_BANDS, PORES_FLOOR);
    let dark_circles = classify(
        normalized_score + dark_circle_adjustment(signal.age),
        &DARK_CIRCLE_BANDS,
        DARK_CIRCLE_FLOOR,
    );

    let concerns = evaluate_concerns(&RuleContext {
        normalized_score,
        skin_score,
        age: signal.age,
        acne,
        pores,
        dark_circles,
    });

    SkinAssessment {
        skin_score,
        acne,
        pores,
        dark_circles,
        age: signal.age,
        concerns,
    }
}
