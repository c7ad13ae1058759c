use core_policy::{FixedEstimator, RoleStrengthPolicy, Strength, StrengthAuthorizer};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn create_test_policy(num_roles: usize) -> RoleStrengthPolicy {
    RoleStrengthPolicy::new((0..num_roles).map(|i| (format!("role{}", i), (i % 5) as i64))).unwrap()
}

fn benchmark_policy_evaluation(c: &mut Criterion) {
    let policy_10 = create_test_policy(10);
    let policy_1000 = create_test_policy(1000);
    let estimator = FixedEstimator(Strength::new(2).unwrap());

    c.bench_function("is_satisfied_10_roles", |b| {
        b.iter(|| {
            policy_10.is_satisfied(
                black_box(&estimator),
                black_box("role5"),
                black_box("@pplepearorange"),
            )
        });
    });

    c.bench_function("is_satisfied_1000_roles", |b| {
        b.iter(|| {
            policy_1000.is_satisfied(
                black_box(&estimator),
                black_box("role500"),
                black_box("@pplepearorange"),
            )
        });
    });

    c.bench_function("satisfied_roles_1000_roles", |b| {
        let auth = StrengthAuthorizer::new(policy_1000.roles(), &estimator);
        b.iter(|| auth.satisfied_roles(black_box("@pplepearorange")).count());
    });
}

fn benchmark_policy_mutation(c: &mut Criterion) {
    c.bench_function("policy_create_100_roles", |b| {
        b.iter(|| create_test_policy(black_box(100)));
    });

    c.bench_function("policy_add_delete_role", |b| {
        let mut policy = create_test_policy(100);
        b.iter(|| {
            policy.add_role(black_box("bench"), black_box(3)).unwrap();
            policy.delete_role(black_box("bench")).unwrap();
        });
    });
}

criterion_group!(benches, benchmark_policy_evaluation, benchmark_policy_mutation);
criterion_main!(benches);
