//! Performance benchmarks for roster-engine

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use roster_engine::{
    merge::merge, query::query, Company, Dashboard, Event, FilterCriteria, SortConfig,
    SortDirection, SortKey, User, UserDraft,
};

fn remote_users() -> Vec<User> {
    (1..=10)
        .map(|id| {
            User::new(id, format!("Remote Person{id}"), format!("r{id}@api.test"), "")
                .without_department()
                .with_company(Company::named(format!("Company {id}")))
        })
        .collect()
}

fn seed_users(count: usize) -> Vec<User> {
    (0..count)
        .map(|i| {
            User::new(
                0,
                format!("First{i} Last{}", i % 17),
                format!("user{i}@example.com"),
                ["Engineering", "Sales", "Support", "Finance"][i % 4],
            )
        })
        .collect()
}

fn collection(size: usize) -> Vec<User> {
    let mut dashboard = Dashboard::with_users(merge(remote_users(), seed_users(90)));
    while dashboard.users().len() < size {
        let n = dashboard.users().len();
        let _ = dashboard.apply(Event::Add(UserDraft::new(
            format!("Extra{n} Person"),
            format!("extra{n}@example.com"),
            "Operations",
        )));
    }
    dashboard.users().to_vec()
}

fn bench_merge(c: &mut Criterion) {
    c.bench_function("merge_10_plus_90", |b| {
        b.iter(|| merge(black_box(remote_users()), black_box(seed_users(100))))
    });
}

fn bench_query(c: &mut Criterion) {
    let mut group = c.benchmark_group("query");

    for size in [100, 500, 1000].iter() {
        let users = collection(*size);

        group.bench_with_input(BenchmarkId::new("no_filters", size), &users, |b, users| {
            b.iter(|| query(black_box(users), &FilterCriteria::default(), "", SortConfig::default()))
        });

        let filters = FilterCriteria {
            department: "eng".into(),
            ..Default::default()
        };
        let sort = SortConfig::new(SortKey::Name, SortDirection::Desc);
        group.bench_with_input(
            BenchmarkId::new("filter_search_sort", size),
            &users,
            |b, users| b.iter(|| query(black_box(users), &filters, "first1", sort)),
        );
    }

    group.finish();
}

fn bench_dashboard(c: &mut Criterion) {
    let mut group = c.benchmark_group("dashboard");

    group.bench_function("render", |b| {
        let dashboard = Dashboard::with_users(collection(500));
        b.iter(|| black_box(&dashboard).render())
    });

    group.bench_function("add_then_delete", |b| {
        let mut dashboard = Dashboard::with_users(collection(500));
        b.iter(|| {
            let _ = dashboard.apply(Event::Add(UserDraft::new("A B", "a@b.com", "X")));
            let _ = dashboard.apply(Event::Delete { id: 501 });
        })
    });

    group.finish();
}

criterion_group!(benches, bench_merge, bench_query, bench_dashboard);
criterion_main!(benches);
