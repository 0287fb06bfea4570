use super::domain::{Concern, Finding, Level};

/// Values the concern rules read. `normalized_score` is the boosted provider score, never the
/// clamped `skin_score`; the two drive different decisions.
pub(crate) struct RuleContext {
    pub normalized_score: f64,
    pub skin_score: u8,
    pub age: u32,
    pub acne: Finding,
    pub pores: Finding,
    pub dark_circles: Finding,
}

type ConcernRule = fn(&RuleContext) -> Option<Concern>;

/// Every primary rule may contribute, in this order.
const PRIMARY_RULES: [ConcernRule; 4] = [acne_rule, pores_rule, dark_circles_rule, aging_rule];

/// Fallback rules run only when the primary tier produced nothing; first hit wins.
const FALLBACK_RULES: [ConcernRule; 2] = [hydration_rule, skin_health_rule];

fn acne_rule(ctx: &RuleContext) -> Option<Concern> {
    let surfaced = match ctx.acne.level {
        Level::Severe => true,
        Level::Moderate => ctx.normalized_score < 60.0,
        Level::None | Level::Mild => false,
    };
    surfaced.then_some(Concern::Acne)
}

fn pores_rule(ctx: &RuleContext) -> Option<Concern> {
    let surfaced = match ctx.pores.level {
        Level::Severe => true,
        Level::Moderate => ctx.normalized_score < 55.0,
        Level::None | Level::Mild => false,
    };
    surfaced.then_some(Concern::Pores)
}

fn dark_circles_rule(ctx: &RuleContext) -> Option<Concern> {
    matches!(ctx.dark_circles.level, Level::Moderate | Level::Severe)
        .then_some(Concern::DarkCircles)
}

fn aging_rule(ctx: &RuleContext) -> Option<Concern> {
    (ctx.age >= 40).then_some(Concern::Aging)
}

fn hydration_rule(ctx: &RuleContext) -> Option<Concern> {
    (ctx.skin_score >= 65).then_some(Concern::Hydration)
}

fn skin_health_rule(_ctx: &RuleContext) -> Option<Concern> {
    Some(Concern::SkinHealth)
}

pub(crate) fn evaluate_concerns(ctx: &RuleContext) -> Vec<Concern> {
    let mut concerns = Vec::new();

    for rule in PRIMARY_RULES {
        if let Some(concern) = rule(ctx) {
            if !concerns.contains(&concern) {
                concerns.push(concern);
            }
        }
    }

    if concerns.is_empty() {
        if let Some(concern) = FALLBACK_RULES.iter().find_map(|rule| rule(ctx)) {
            concerns.push(concern);
        }
    }

    concerns
}
