use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use lpp_encoder::LppEncoder;

fn bench_encode_single(c: &mut Criterion) {
    c.bench_function("encode_temperature", |b| {
        b.iter(|| {
            let mut encoder = LppEncoder::new();
            encoder.add_temperature(7, -15.65);
            encoder.into_inner()
        });
    });
}

fn bench_encode_all_types(c: &mut Criterion) {
    c.bench_function("encode_all_types", |b| {
        b.iter(|| {
            let mut encoder = LppEncoder::new();
            encoder
                .add_digital_input(1, 255)
                .add_digital_output(2, 100)
                .add_analog_input(3, 54.5)
                .add_analog_output(4, -54.5)
                .add_luminosity(5, 500)
                .add_presence(6, 50)
                .add_temperature(7, -15.6)
                .add_relative_humidity(8, 49.5)
                .add_accelerometer(9, -0.424, 0.015, 1.666)
                .add_barometric_pressure(10, 1073.5)
                .add_gyrometer(11, 3.55, 5.61, -4.1)
                .add_gps(12, 52.3655, 4.8885, 21.54);
            encoder.into_inner()
        });
    });
}

fn bench_encode_reused_buffer(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode_gps_frame");

    for units in [1usize, 10, 100] {
        group.throughput(Throughput::Bytes((units * 11) as u64));

        group.bench_with_input(BenchmarkId::new("fresh", units), &units, |b, &n| {
            b.iter(|| {
                let mut encoder = LppEncoder::new();
                for channel in 0..n {
                    encoder.add_gps(channel as u8, 52.3655, 4.8885, 21.54);
                }
                encoder.into_inner()
            });
        });

        group.bench_with_input(BenchmarkId::new("reset", units), &units, |b, &n| {
            let mut encoder = LppEncoder::new();
            encoder.grow(n * 11);
            b.iter(|| {
                encoder.reset();
                for channel in 0..n {
                    encoder.add_gps(channel as u8, 52.3655, 4.8885, 21.54);
                }
                encoder.len()
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_encode_single,
    bench_encode_all_types,
    bench_encode_reused_buffer,
);
criterion_main!(benches);
