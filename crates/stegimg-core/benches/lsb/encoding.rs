use criterion::{criterion_group, criterion_main, Criterion};
use stegimg_core::media::lsb_codec;

pub fn lsb_encoding(c: &mut Criterion) {
    c.bench_function("LSB Encoding", |b| {
        // a 256x256 carrier
        let mut pixels = vec![0x5au8; 256 * 256 * 3];
        let secret_message = b"Hello World!";

        b.iter(|| {
            lsb_codec::hide(&mut pixels, &secret_message[..]).expect("Cannot hide secret message");
        })
    });
}

criterion_group!(benches, lsb_encoding);
criterion_main!(benches);
