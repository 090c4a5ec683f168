use criterion::{black_box, criterion_group, criterion_main, Criterion};
use dynamics_rs::prelude::*;
use dynamics_tests::scenarios::serial_torsion_chain;

fn run_forward_kinematics(model: &Model, data: &mut Data, q: &Configuration, v: &Configuration) {
    set_pos(model, data, q).unwrap();
    set_vel(model, data, v).unwrap();
}

fn bench_forward_kinematics(c: &mut Criterion) {
    let model = serial_torsion_chain(30);
    let mut data = model.create_data();
    let q = Configuration::from_element(model.nv(), 0.2);
    let v = Configuration::from_element(model.nv(), 0.1);

    c.bench_function("forward_kinematics_chain30", |b| {
        b.iter(|| run_forward_kinematics(black_box(&model), black_box(&mut data), &q, &v));
    });
}

criterion_group!(benches, bench_forward_kinematics);
criterion_main!(benches);
