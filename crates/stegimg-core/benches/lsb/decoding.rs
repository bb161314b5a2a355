use criterion::{criterion_group, criterion_main, Criterion};
use stegimg_core::media::lsb_codec;

pub fn lsb_decoding(c: &mut Criterion) {
    c.bench_function("LSB Decoding", |b| {
        let mut pixels = vec![0x5au8; 256 * 256 * 3];
        lsb_codec::hide(&mut pixels, b"Hello World!").expect("Cannot hide secret message");

        b.iter(|| {
            lsb_codec::unveil(&pixels).expect("Cannot unveil secret message");
        })
    });
}

criterion_group!(benches, lsb_decoding);
criterion_main!(benches);
