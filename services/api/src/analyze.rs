use crate::infra::catalog_repository;
use clap::Args;
use serde_json::json;
use skinkit::config::AppConfig;
use skinkit::error::AppError;
use skinkit::workflows::skincare::analysis::{AnalysisRecord, TtlAnalysisStore};
use skinkit::workflows::skincare::assessment::{Concern, Finding, RawSignal};
use skinkit::workflows::skincare::catalog::{CatalogRepository, Product, ProductCatalog};
use skinkit::workflows::skincare::recommendation::{PersonalizedKit, RoutineStep};
use skinkit::workflows::skincare::SkinAnalysisService;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug)]
pub(crate) struct AnalyzeArgs {
    /// Provider beauty score in [0, 100]
    #[arg(long)]
    pub(crate) beauty_score: f64,
    /// Estimated age in years
    #[arg(long)]
    pub(crate) age: u32,
    /// Optional JSON product list replacing the house catalog
    #[arg(long)]
    pub(crate) catalog: Option<PathBuf>,
    /// Print the analysis, recommendations, and kit as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct CatalogArgs {
    /// Only list products tagged with this concern (e.g. `dark-circles`)
    #[arg(long, value_parser = parse_concern)]
    pub(crate) concern: Option<Concern>,
    /// Optional JSON product list replacing the house catalog
    #[arg(long)]
    pub(crate) catalog: Option<PathBuf>,
    /// Print the listing as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn parse_concern(raw: &str) -> Result<Concern, String> {
    Concern::from_tag(raw.trim()).ok_or_else(|| {
        let known: Vec<&str> = Concern::ALL.iter().map(|concern| concern.tag()).collect();
        format!("unknown concern '{raw}' (expected one of: {})", known.join(", "))
    })
}

pub(crate) fn run_analyze(args: AnalyzeArgs) -> Result<(), AppError> {
    let AnalyzeArgs {
        beauty_score,
        age,
        catalog,
        json,
    } = args;

    let config = AppConfig::load()?;
    let store = Arc::new(TtlAnalysisStore::new(config.analysis.ttl()));
    let catalog = Arc::new(catalog_repository(catalog.as_deref())?);
    let service = SkinAnalysisService::new(store, catalog, config.analysis.recommendation);

    let record = service.analyze(RawSignal::new(beauty_score, age))?;
    let recommendations = service.recommendations(&record.analysis_id)?;
    let kit = service.kit(&record.analysis_id)?;

    if json {
        let payload = json!({
            "analysis": record.view(),
            "recommendations": recommendations,
            "kit": kit,
        });
        match serde_json::to_string_pretty(&payload) {
            Ok(rendered) => println!("{rendered}"),
            Err(err) => println!("JSON output unavailable: {err}"),
        }
        return Ok(());
    }

    render_analysis(&record);
    render_recommendations(&recommendations);
    render_kit(&kit);
    Ok(())
}

pub(crate) fn run_catalog(args: CatalogArgs) -> Result<(), AppError> {
    let CatalogArgs {
        concern,
        catalog,
        json,
    } = args;

    let catalog = catalog_repository(catalog.as_deref())?.snapshot()?;
    let products = catalog_listing(&catalog, concern);

    if json {
        match serde_json::to_string_pretty(&products) {
            Ok(rendered) => println!("{rendered}"),
            Err(err) => println!("JSON output unavailable: {err}"),
        }
        return Ok(());
    }

    match concern {
        Some(concern) => println!("Catalog products for {}", concern.tag()),
        None => println!("Catalog products"),
    }
    if products.is_empty() {
        println!("- none");
    }
    for product in products {
        println!(
            "- {} [{}] {} | {} | {}",
            product.id.as_str(),
            product.category.label(),
            product.name,
            format_price(product),
            product.concerns.iter().cloned().collect::<Vec<_>>().join(", ")
        );
    }
    Ok(())
}

pub(crate) fn catalog_listing(
    catalog: &ProductCatalog,
    concern: Option<Concern>,
) -> Vec<&Product> {
    let mut products: Vec<&Product> = match concern {
        Some(concern) => catalog.by_concern(concern.tag()).collect(),
        None => catalog.products().iter().collect(),
    };
    products.sort_by_key(|product| product.category);
    products
}

fn render_analysis(record: &AnalysisRecord) {
    let assessment = &record.assessment;
    println!("Skin analysis {}", record.analysis_id.0);
    println!(
        "Input: beauty score {:.1} | age {}",
        record.signal.beauty_score, record.signal.age
    );
    println!("Skin score: {}/100", assessment.skin_score);
    println!("\nFindings");
    render_finding("Acne", &assessment.acne);
    render_finding("Pores", &assessment.pores);
    render_finding("Dark circles", &assessment.dark_circles);

    let concerns = assessment.prioritized_concerns();
    if concerns.is_empty() {
        println!("\nConcerns: none");
    } else {
        let tags: Vec<&str> = concerns.iter().map(|concern| concern.tag()).collect();
        println!("\nConcerns (highest priority first): {}", tags.join(", "));
    }
}

fn render_finding(label: &str, finding: &Finding) {
    println!(
        "- {label}: {} (severity {})",
        finding.level.label(),
        finding.severity
    );
}

fn render_recommendations(products: &[Product]) {
    if products.is_empty() {
        println!("\nRecommended products: none");
        return;
    }

    println!("\nRecommended products");
    for product in products {
        println!(
            "- {} ({}) {}",
            product.name,
            product.category.label(),
            format_price(product)
        );
    }
}

fn render_kit(kit: &PersonalizedKit) {
    if kit.is_empty() {
        println!("\nPersonalized kit: no products available");
        return;
    }

    println!("\nMorning routine");
    render_routine(&kit.morning_routine);
    println!("\nEvening routine");
    render_routine(&kit.evening_routine);

    println!(
        "\nKit total ${:.2} | bundle savings ${:.2} | bundle price ${:.2} ({} products)",
        kit.total_price,
        kit.savings,
        kit.bundle_price,
        kit.unique_products().len()
    );
}

fn render_routine(steps: &[RoutineStep]) {
    if steps.is_empty() {
        println!("- no steps");
    }
    for step in steps {
        println!(
            "{}. {} ({}): {}",
            step.step,
            step.product.name,
            step.product.category.label(),
            step.instruction
        );
    }
}

fn format_price(product: &Product) -> String {
    match product.discount_price {
        Some(discount) => format!("${discount:.2} (was ${:.2})", product.price),
        None => format!("${:.2}", product.price),
    }
}
