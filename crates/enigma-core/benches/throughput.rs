use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use enigma_core::{Machine, MachineConfig};

fn m4_config() -> MachineConfig {
    MachineConfig::new("Beta II IV I", "B-Thin")
        .unwrap()
        .with_rings("A A A V")
        .unwrap()
        .with_positions("V J N A")
        .unwrap()
        .with_plugs("AT BL DF GJ HM NW OP QY RZ VX")
        .unwrap()
}

fn bench_build(c: &mut Criterion) {
    let cfg = m4_config();
    c.bench_function("machine_build_m4", |b| {
        b.iter(|| {
            let m = Machine::build(black_box(&cfg)).unwrap();
            black_box(m)
        })
    });
}

fn bench_str(c: &mut Criterion) {
    let cfg = m4_config();
    let text = "ABCDEFGHIJKLMNOPQRSTUVWXYZ".repeat(1024);

    let mut group = c.benchmark_group("process_str");
    group.throughput(Throughput::Bytes(text.len() as u64));
    group.bench_function("m4_26k", |b| {
        b.iter(|| {
            let mut m = Machine::build(&cfg).unwrap();
            black_box(m.process_str(black_box(&text)).unwrap())
        })
    });
    group.finish();
}

fn bench_symbol(c: &mut Criterion) {
    let mut m = Machine::build(&m4_config()).unwrap();
    c.bench_function("process_symbol", |b| {
        b.iter(|| {
            let c = m.process_symbol(black_box('Q')).unwrap();
            black_box(c)
        })
    });
}

criterion_group!(benches, bench_build, bench_str, bench_symbol);
criterion_main!(benches);
