// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::hint::black_box;
use sundry_core::num::primes::{prime_factors_with, sieve};
use sundry_core::num::totient::{totient_with, totients_up_to};

const SIZES: [usize; 3] = [10_000, 100_000, 1_000_000];

fn bench_sieve(c: &mut Criterion) {
    let mut group = c.benchmark_group("sieve");
    for &max in &SIZES {
        group.throughput(Throughput::Elements(max as u64));
        group.bench_with_input(BenchmarkId::from_parameter(max), &max, |b, &max| {
            b.iter(|| sieve(black_box(max)))
        });
    }
    group.finish();
}

fn bench_factorisation(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0x5EED);
    let inputs: Vec<u64> = (0..1_000).map(|_| rng.gen_range(2..1_000_000_000)).collect();
    // sqrt(1e9) < 31_623
    let primes = sieve(31_623);

    let mut group = c.benchmark_group("factorisation");
    group.throughput(Throughput::Elements(inputs.len() as u64));
    group.bench_function("prime_factors_with", |b| {
        b.iter(|| {
            for &n in &inputs {
                black_box(prime_factors_with(black_box(n), &primes));
            }
        })
    });
    group.bench_function("totient_with", |b| {
        b.iter(|| {
            for &n in &inputs {
                black_box(totient_with(black_box(n), &primes));
            }
        })
    });
    group.finish();
}

fn bench_totient_sieve(c: &mut Criterion) {
    let mut group = c.benchmark_group("totients_up_to");
    for &target in &SIZES {
        group.throughput(Throughput::Elements(target as u64));
        group.bench_with_input(BenchmarkId::from_parameter(target), &target, |b, &target| {
            b.iter(|| totients_up_to(black_box(target)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_sieve, bench_factorisation, bench_totient_sieve);
criterion_main!(benches);
