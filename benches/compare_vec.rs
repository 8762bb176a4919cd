#[macro_use]
extern crate criterion;

use criterion::{black_box, Criterion};

use incr_vec::DynamicArray;

fn standard_compare(c: &mut Criterion) {
    const SMALL_COUNT: usize = 100;
    const LARGE_COUNT: usize = 1000;

    for count in [SMALL_COUNT, LARGE_COUNT] {
        for growth in [1usize, 16, 256] {
            c.bench_function(
                &format!("dynarray growth {} add {} values", growth, count),
                |b| {
                    b.iter(|| {
                        let mut arr = DynamicArray::<usize>::with_growth(growth);
                        for value in 0..count {
                            arr.add(black_box(value));
                        }
                    });
                },
            );
        }

        c.bench_function(&format!("dynarray new({0}) set {0} values", count), |b| {
            b.iter(|| {
                let mut arr = DynamicArray::<usize>::new(count, 1);
                for idx in 0..count {
                    arr[idx] = black_box(idx);
                }
            });
        });

        c.bench_function(&format!("stdvec push {} values", count), |b| {
            b.iter(|| {
                let mut vec = Vec::<usize>::new();
                for value in 0..count {
                    vec.push(black_box(value));
                }
            });
        });

        c.bench_function(
            &format!("dynarray growth 16 add and remove {} values", count),
            |b| {
                b.iter(|| {
                    let mut arr = DynamicArray::<usize>::with_growth(16);
                    for value in 0..count {
                        arr.add(black_box(value));
                    }
                    while !arr.is_empty() {
                        let _ = black_box(arr.remove_at(arr.size() - 1));
                    }
                });
            },
        );

        c.bench_function(&format!("dynarray extend from slice {} values", count), |b| {
            let data: Vec<usize> = (0..count).collect();
            b.iter(|| {
                let mut arr = DynamicArray::<usize>::empty();
                arr.extend_from_slice(black_box(&data));
            });
        });

        c.bench_function(&format!("stdvec extend from slice {} values", count), |b| {
            let data: Vec<usize> = (0..count).collect();
            b.iter(|| {
                let mut vec = Vec::<usize>::new();
                vec.extend_from_slice(black_box(&data));
            });
        });
    }
}

criterion_group!(benches, standard_compare);
criterion_main!(benches);
