use bencher::{ROUTES, TestGroup, test_cases};
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use http::Method;
use micro_router::Router;
use std::hint::black_box;

fn build_router() -> Router<usize> {
    let mut router = Router::new();
    for (index, pattern) in ROUTES.iter().enumerate() {
        router.add(&Method::GET, *pattern, index).expect("GET should be a supported method");
    }
    router
}

fn benchmark_lookup(criterion: &mut Criterion) {
    let router = build_router();
    let mut group = criterion.benchmark_group("router_lookup");

    for case in test_cases() {
        let expect_match = !matches!(case.group(), TestGroup::Miss);
        assert_eq!(router.at(&Method::GET, case.path()).is_some(), expect_match, "unexpected result for {}", case.name());

        group.bench_with_input(BenchmarkId::from_parameter(case.name()), &case, |b, case| {
            b.iter(|| black_box(router.at(&Method::GET, black_box(case.path())).map(|matched| *matched.handler())));
        });
    }

    group.finish();
}

fn benchmark_build(criterion: &mut Criterion) {
    criterion.bench_function("router_build", |b| b.iter(|| black_box(build_router())));
}

criterion_group!(router, benchmark_lookup, benchmark_build);
criterion_main!(router);
