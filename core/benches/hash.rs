use criterion::criterion_group;
use criterion::criterion_main;
use criterion::{BenchmarkId, Criterion, Throughput};
use hmac::Mac;
use sha2::Digest;

use opsign_core::hash::{hmac_sha256, sha256};

criterion_group!(benches, bench_sha256, bench_hmac_sha256);
criterion_main!(benches);

pub fn bench_sha256(c: &mut Criterion) {
    let mut group = c.benchmark_group("sha256");

    for size in [64, 1024, 16 * 1024] {
        let input = vec![0x5au8; size];
        group.throughput(Throughput::Bytes(size as u64));

        group.bench_with_input(BenchmarkId::new("opsign", size), &input, |b, input| {
            b.iter(|| sha256(input))
        });
        group.bench_with_input(BenchmarkId::new("sha2", size), &input, |b, input| {
            b.iter(|| sha2::Sha256::digest(input))
        });
    }

    group.finish();
}

pub fn bench_hmac_sha256(c: &mut Criterion) {
    let mut group = c.benchmark_group("hmac_sha256");
    let key = b"c2VjcmV0LWFwaS1rZXktZm9yLWJlbmNobWFya2luZy1vbmx5LW5vdC1yZWFsLTAxMjM0NTY3ODk=";
    let message = b"GEThttps://api.unleashedsoftware.com/ProductspageSize=200&page=1";

    group.bench_function("opsign", |b| b.iter(|| hmac_sha256(key, message)));

    group.bench_function("hmac", |b| {
        b.iter(|| {
            let mut mac = hmac::Hmac::<sha2::Sha256>::new_from_slice(key).expect("any key length");
            mac.update(message);
            mac.finalize().into_bytes()
        })
    });

    group.finish();
}
