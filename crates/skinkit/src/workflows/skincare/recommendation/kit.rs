use serde::{Deserialize, Serialize};
use tracing::debug;

use super::super::catalog::{Product, ProductCategory};
use super::table::{EYE_CREAM_PRODUCT_ID, NIGHT_CREAM_PRODUCT_ID};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeOfDay {
    Morning,
    Evening,
}

/// One numbered application step inside a routine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoutineStep {
    pub step: u32,
    pub time_of_day: TimeOfDay,
    pub product: Product,
    pub instruction: String,
}

/// Morning and evening routines plus bundle pricing, built fresh per request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalizedKit {
    pub morning_routine: Vec<RoutineStep>,
    pub evening_routine: Vec<RoutineStep>,
    pub total_price: f64,
    pub savings: f64,
    pub bundle_price: f64,
}

impl PersonalizedKit {
    /// Products across both routines, first occurrence wins.
    pub fn unique_products(&self) -> Vec<&Product> {
        let mut unique: Vec<&Product> = Vec::new();
        for step in self.morning_routine.iter().chain(&self.evening_routine) {
            if !unique.iter().any(|product| product.id == step.product.id) {
                unique.push(&step.product);
            }
        }
        unique
    }

    pub fn is_empty(&self) -> bool {
        self.morning_routine.is_empty() && self.evening_routine.is_empty()
    }
}

struct StepTemplate {
    /// Tried in order; the first category with an available product fills the step.
    categories: &'static [ProductCategory],
    preferred_tags: &'static [&'static str],
    preferred_id: Option<&'static str>,
    instruction: &'static str,
}

const MORNING_TEMPLATE: [StepTemplate; 5] = [
    StepTemplate {
        categories: &[ProductCategory::Cleanser],
        preferred_tags: &[],
        preferred_id: None,
        instruction: "Massage onto damp skin for 60 seconds, then rinse with lukewarm water.",
    },
    StepTemplate {
        categories: &[ProductCategory::Treatment, ProductCategory::Serum],
        preferred_tags: &[],
        preferred_id: None,
        instruction: "Press onto clean skin to prep it for the following layers.",
    },
    StepTemplate {
        categories: &[ProductCategory::Serum],
        preferred_tags: &["dark-spots", "dullness"],
        preferred_id: None,
        instruction: "Apply 2-3 drops and press gently into face and neck.",
    },
    StepTemplate {
        categories: &[ProductCategory::Moisturizer],
        preferred_tags: &[],
        preferred_id: None,
        instruction: "Smooth a pea-sized amount over the face to lock in hydration.",
    },
    StepTemplate {
        categories: &[ProductCategory::Sunscreen],
        preferred_tags: &[],
        preferred_id: None,
        instruction: "Apply generously as the last step; reapply every two hours outdoors.",
    },
];

const EVENING_TEMPLATE: [StepTemplate; 5] = [
    StepTemplate {
        categories: &[ProductCategory::Cleanser],
        preferred_tags: &[],
        preferred_id: None,
        instruction: "Remove sunscreen and makeup, then rinse thoroughly.",
    },
    StepTemplate {
        categories: &[ProductCategory::Treatment],
        preferred_tags: &[],
        preferred_id: None,
        instruction: "Apply to clean skin and leave on or rinse off as directed.",
    },
    StepTemplate {
        categories: &[ProductCategory::Serum],
        preferred_tags: &["wrinkles", "acne", "texture"],
        preferred_id: None,
        instruction: "Apply a thin layer; start every other night if new to actives.",
    },
    StepTemplate {
        categories: &[ProductCategory::Treatment],
        preferred_tags: &[],
        preferred_id: Some(EYE_CREAM_PRODUCT_ID),
        instruction: "Tap a small amount around the orbital bone.",
    },
    StepTemplate {
        categories: &[ProductCategory::Moisturizer],
        preferred_tags: &[],
        preferred_id: Some(NIGHT_CREAM_PRODUCT_ID),
        instruction: "Finish with a generous layer to support overnight repair.",
    },
];

fn select_product<'a>(pool: &'a [Product], template: &StepTemplate) -> Option<&'a Product> {
    if let Some(id) = template.preferred_id {
        if let Some(product) = pool.iter().find(|product| product.id.as_str() == id) {
            return Some(product);
        }
    }

    template.categories.iter().find_map(|category| {
        let mut candidates = pool
            .iter()
            .filter(|product| product.category == *category);
        let first = candidates.next()?;
        if template.preferred_tags.is_empty() || first.targets_any(template.preferred_tags) {
            return Some(first);
        }
        Some(
            candidates
                .find(|product| product.targets_any(template.preferred_tags))
                .unwrap_or(first),
        )
    })
}

fn assemble_routine(
    pool: &[Product],
    template: &[StepTemplate],
    time_of_day: TimeOfDay,
) -> Vec<RoutineStep> {
    let mut steps: Vec<RoutineStep> = Vec::with_capacity(template.len());

    for slot in template {
        match select_product(pool, slot) {
            Some(product) => {
                let step = steps.len() as u32 + 1;
                steps.push(RoutineStep {
                    step,
                    time_of_day,
                    product: product.clone(),
                    instruction: slot.instruction.to_string(),
                });
            }
            None => debug!(
                ?time_of_day,
                categories = ?slot.categories,
                "no candidate for routine step, omitting"
            ),
        }
    }

    steps
}

/// Build both routines from a candidate pool and price the unique products once each.
pub(crate) fn assemble_kit(pool: &[Product], discount_rate: f64) -> PersonalizedKit {
    let morning_routine = assemble_routine(pool, &MORNING_TEMPLATE, TimeOfDay::Morning);
    let evening_routine = assemble_routine(pool, &EVENING_TEMPLATE, TimeOfDay::Evening);

    let mut kit = PersonalizedKit {
        morning_routine,
        evening_routine,
        total_price: 0.0,
        savings: 0.0,
        bundle_price: 0.0,
    };

    let total_price: f64 = kit
        .unique_products()
        .iter()
        .map(|product| product.effective_price())
        .sum();
    let savings = (total_price * discount_rate).round();

    kit.total_price = total_price;
    kit.savings = savings;
    kit.bundle_price = total_price - savings;
    kit
}
