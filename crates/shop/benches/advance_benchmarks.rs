use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use yakshop_core::{Days, Litres};
use yakshop_herd::{Animal, Herd, Sex};
use yakshop_shop::{Order, OrderedGoods, Shop};

/// Herd of `size` animals with ages spread over the whole lifespan.
fn herd_of(size: u32) -> Herd {
    (0..size)
        .map(|i| {
            let sex = if i % 4 == 0 { Sex::Male } else { Sex::Female };
            Animal::new(format!("yak-{i}"), Days::new((i * 37) % 1000), sex).unwrap()
        })
        .collect()
}

/// Benchmark: simulating a year of days for herds of growing size.
fn bench_advance_one_year(c: &mut Criterion) {
    let mut group = c.benchmark_group("advance_one_year");

    for size in [10u32, 100, 1_000] {
        group.throughput(Throughput::Elements(u64::from(size) * 100));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            b.iter_batched(
                || Shop::with_herd(herd_of(size)),
                |mut shop| {
                    shop.advance_to(black_box(Days::years(1)));
                    shop
                },
                criterion::BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

/// Benchmark: order fulfillment against a stocked shop.
fn bench_place_order(c: &mut Criterion) {
    let mut shop = Shop::with_herd(herd_of(100));
    shop.advance_to(Days::new(50));

    let order = Order {
        customer: "bench".to_string(),
        goods: OrderedGoods {
            milk: Litres::new(0.5),
            skins: 0,
        },
    };

    c.bench_function("place_order_milk", |b| {
        b.iter(|| shop.place_order(black_box(&order)));
    });
}

criterion_group!(benches, bench_advance_one_year, bench_place_order);
criterion_main!(benches);
