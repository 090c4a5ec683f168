use criterion::{black_box, criterion_group, criterion_main, Criterion};
use dynamics_rs::prelude::*;
use dynamics_tests::scenarios::serial_torsion_chain;

/// A full dynamics step followed by the standalone inverse
/// (`calcInternalForce`) recovering generalized force from the induced
/// spatial forces, the round-trip this core actually exposes in place of
/// a from-scratch RNEA.
fn run_forward_then_internal_force(
    model: &Model,
    data: &mut Data,
    q: &Configuration,
    v: &Configuration,
    tau: &Configuration,
    ext_forces: &[SpatialForce],
) {
    forward_dynamics(model, data, q, v, tau, ext_forces).unwrap();

    let mut induced_forces = vec![SpatialForce::zero(); model.njoints()];
    for id in 1..model.njoints() {
        let m_k_s_acc = &data.spatial_inertia[id] * &data.accel[id];
        induced_forces[id] = SpatialForce::zero() - m_k_s_acc;
    }
    calc_internal_force(model, data, &induced_forces).unwrap();
}

fn bench_inverse_dynamics(c: &mut Criterion) {
    let model = serial_torsion_chain(30);
    let mut data = model.create_data();
    let q = Configuration::from_element(model.nv(), 0.2);
    let v = Configuration::from_element(model.nv(), 0.1);
    let tau = Configuration::from_element(model.nv(), 1.0);
    let ext_forces = vec![SpatialForce::zero(); model.njoints()];

    c.bench_function("forward_dynamics_internal_force_round_trip_chain30", |b| {
        b.iter(|| {
            run_forward_then_internal_force(
                black_box(&model),
                black_box(&mut data),
                &q,
                &v,
                &tau,
                &ext_forces,
            )
        });
    });
}

criterion_group!(benches, bench_inverse_dynamics);
criterion_main!(benches);
