use chrono::Utc;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use kimhoan_catalog::{GoldType, ProductCategory};
use kimhoan_events::InMemoryEventBus;
use kimhoan_infra::PricingRuntime;
use kimhoan_pricing::{
    calculate_full_price, calculate_labor_cost, InMemoryGoldPriceRepository, LaborCostInput,
    PricingInput, UpdateGoldPrice,
};

fn pricing_input(category: ProductCategory, gold_weight_gram: f64, stone_value_vnd: i64) -> PricingInput {
    PricingInput {
        product_code: "BM-0001".to_string(),
        category,
        gold_type: GoldType::G750,
        gold_weight_gram,
        stone_value_vnd,
        design_description: "ổ đá chủ 6 ly".to_string(),
        unit: None,
        markup_tier: None,
        gold_market_price_override: None,
        special_construction: false,
    }
}

fn bench_labor_engine(c: &mut Criterion) {
    let mut group = c.benchmark_group("labor_engine");
    group.throughput(Throughput::Elements(1));

    for (name, category, e, n) in [
        ("necklace", ProductCategory::Necklace, 10.0, 50_000_000),
        ("pendant", ProductCategory::Pendant, 3.5, 20_000_000),
        ("womens_ring", ProductCategory::WomensRing, 2.0, 10_000_000),
        ("accessories", ProductCategory::Accessories, 2.0, 10_000_000),
    ] {
        let input = LaborCostInput {
            category,
            gold_weight_gram: e,
            stone_value_vnd: n,
            design_description: "ổ đá chủ 6 ly".to_string(),
            unit: None,
            special_construction: false,
        };
        group.bench_with_input(BenchmarkId::from_parameter(name), &input, |b, input| {
            b.iter(|| calculate_labor_cost(black_box(input)));
        });
    }
    group.finish();
}

fn bench_full_price(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_price");
    group.throughput(Throughput::Elements(1));

    group.bench_function("necklace_breakdown", |b| {
        b.iter(|| {
            calculate_full_price(
                black_box(pricing_input(ProductCategory::Necklace, 10.0, 50_000_000)),
                Utc::now(),
            )
        });
    });
    group.finish();
}

fn bench_runtime_update(c: &mut Criterion) {
    let bus = InMemoryEventBus::new();
    let runtime = PricingRuntime::new(InMemoryGoldPriceRepository::new(), bus);
    let command = UpdateGoldPrice {
        gold_type: GoldType::G750,
        new_price_per_chi: 11_700_000,
        source: "sjc_api".to_string(),
    };

    c.bench_function("runtime_update_gold_price", |b| {
        b.iter(|| runtime.update_gold_price(black_box(&command)));
    });
}

criterion_group!(
    benches,
    bench_labor_engine,
    bench_full_price,
    bench_runtime_update
);
criterion_main!(benches);
