//! Validation pass benchmarks
//!
//! Measures one engine pass over a derived field table and the individual
//! strategies it dispatches to.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rulecheck::{EmailValidator, FieldValue, LengthValidator, Strategy, Validate};

#[derive(Validate)]
struct UserRegistration {
    #[rule(required, length(min = 10, max = 255))]
    user: String,

    #[rule(required, email)]
    email: String,
}

fn bench_validate(c: &mut Criterion) {
    let mut group = c.benchmark_group("validate");

    let valid = UserRegistration {
        user: "Tio Jobs Senior".to_string(),
        email: "admin@admin.com".to_string(),
    };
    let invalid = UserRegistration {
        user: String::new(),
        email: "not-an-email".to_string(),
    };

    group.bench_function("valid", |b| b.iter(|| black_box(&valid).validate()));
    group.bench_function("invalid", |b| b.iter(|| black_box(&invalid).validate()));

    group.finish();
}

fn bench_strategies(c: &mut Criterion) {
    let mut group = c.benchmark_group("strategies");

    group.bench_function("email", |b| {
        b.iter(|| {
            EmailValidator.validate(
                black_box(&FieldValue::Str("user.name+tag@domain.co.uk")),
                (),
            )
        })
    });

    for len in [16usize, 256, 4096] {
        let text = "é".repeat(len);
        group.bench_with_input(BenchmarkId::new("length", len), &text, |b, text| {
            b.iter(|| {
                LengthValidator.validate(black_box(&FieldValue::Str(text)), (10, 255))
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_validate, bench_strategies);
criterion_main!(benches);
