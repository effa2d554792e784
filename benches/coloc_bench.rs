use coloc::{
    filter::{types::AnnouncementType, AnnouncementFilter, HousingFilter},
    PageRequest, Searchable, Sort, Store,
};
use criterion::{criterion_group, criterion_main, Criterion};
use serde_json::json;

fn filter() -> AnnouncementFilter {
    AnnouncementFilter::new()
        .with_rent_price_start(400)
        .with_rent_price_end(900)
        .with_types(vec![AnnouncementType::Rent, AnnouncementType::Sharing])
        .with_pictures(true)
        .with_housing_filter(HousingFilter::new().with_room_count(2))
}

async fn setup() -> Store {
    let store = Store::new();
    let documents = (0..1000)
        .map(|i| {
            json!({
                "title": format!("Announcement {i}"),
                "type": if i % 3 == 0 { "rent" } else { "sharing" },
                "rentPrice": 300 + (i % 70) * 10,
                "pictures": if i % 2 == 0 { json!(["front.jpg"]) } else { json!([]) },
                "housing": {"roomCount": i % 5},
            })
        })
        .collect::<Vec<_>>();
    store.insert_many("announcement", documents).await.unwrap();
    store
}

fn build_criteria_benchmark(c: &mut Criterion) {
    let filter = filter();
    c.bench_function("build criteria", |b| {
        b.iter(|| filter.full_criteria());
    });
}

fn find_page_benchmark(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let store = rt.block_on(setup());
    let criteria = filter().full_criteria();
    let pageable = PageRequest::new(2, 20, Sort::descending(["rentPrice"]));

    c.bench_function("find page of 1000", |b| {
        b.iter(|| {
            rt.block_on(async {
                store
                    .find_page::<serde_json::Value, _>("announcement", &criteria, &pageable)
                    .await
                    .unwrap();
            });
        });
    });
}

criterion_group!(benches, build_criteria_benchmark, find_page_benchmark);
criterion_main!(benches);
