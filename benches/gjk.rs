use criterion::{criterion_group, criterion_main, Criterion};
use panzer_physics::intersections::intersects;
use panzer_physics::models::{Collider, Quaternion};
use panzer_physics::suspension::{solve_arm, RoadWheel, SuspensionArm};
use panzer_physics::utils::DEFAULT_SOLVER_CONSTANTS;

pub fn bench_intersections(c: &mut Criterion) {
    let _ = env_logger::try_init();

    let mut group = c.benchmark_group("intersection_tests");
    group.measurement_time(std::time::Duration::from_secs(5));
    group.sample_size(100);

    let sphere_a = Collider::new_sphere((0.0, 0.0, 0.0), 1.0);
    let sphere_b = Collider::new_sphere((1.5, 0.0, 0.0), 1.0);
    let sphere_far = Collider::new_sphere((4.0, 0.0, 0.0), 1.0);

    group.bench_function("sphere_sphere_overlap", |b| {
        b.iter(|| intersects(&sphere_a, &sphere_b))
    });

    group.bench_function("sphere_sphere_separated", |b| {
        b.iter(|| intersects(&sphere_a, &sphere_far))
    });

    let orientation = Quaternion::from_axis_angle((0.0, 0.0, 1.0), 0.7);
    let box_a = Collider::new_box((0.0, 0.0, 0.0), Quaternion::identity(), 2.0, 2.0, 2.0);
    let box_b = Collider::new_box((1.5, 0.5, 0.0), orientation, 2.0, 2.0, 2.0);

    group.bench_function("box_box_rotated", |b| b.iter(|| intersects(&box_a, &box_b)));

    let ground = Collider::new_box((0.0, 0.0, -5.0), Quaternion::identity(), 100.0, 100.0, 10.0);
    let wheel = Collider::swept_cylinder((1.0, 0.0, 0.4), (0.0, -1.0, 0.0), 0.5, 0.4);

    group.bench_function("cylinder_box", |b| b.iter(|| intersects(&ground, &wheel)));

    group.finish();
}

pub fn bench_suspension_solve(c: &mut Criterion) {
    let mut group = c.benchmark_group("suspension_solve");
    group.measurement_time(std::time::Duration::from_secs(5));
    group.sample_size(100);

    let ground = [Collider::new_box(
        (0.0, 0.0, -5.0),
        Quaternion::identity(),
        100.0,
        100.0,
        10.0,
    )];

    group.bench_function("solve_arm_bisection", |b| {
        let wheel = RoadWheel::new(0.5, (0.0, -1.0, 0.0), (0.0, 0.0, 0.0));
        let mut arm =
            SuspensionArm::new((0.0, 0.0, 0.2), (1.0, 0.0, 0.0), wheel, 0.4, (0.0, -1.0, 0.0))
                .unwrap();

        b.iter(|| {
            arm.set_angle(15.0);
            solve_arm(&mut arm, &ground, &DEFAULT_SOLVER_CONSTANTS, 0.016);
        })
    });

    group.finish();
}

criterion_group!(benches, bench_intersections, bench_suspension_solve);
criterion_main!(benches);
