use criterion::{criterion_group, criterion_main, Criterion};
use nalgebra::{Matrix4, Point3, Vector3};
use rs_collision::interactions::GjkSolver;
use rs_collision::models::ConvexBody;

fn unit_cube_at(center: Vector3<f64>) -> ConvexBody {
    let vertices: Vec<Point3<f64>> = (0..8)
        .map(|i| {
            Point3::new(
                if i & 1 == 0 { -0.5 } else { 0.5 },
                if i & 2 == 0 { -0.5 } else { 0.5 },
                if i & 4 == 0 { -0.5 } else { 0.5 },
            )
        })
        .collect();
    let mut body = ConvexBody::new(vertices);
    body.update(Matrix4::new_translation(&center));
    body
}

/// A unit sphere sampled with a golden-angle spiral, `count` vertices.
fn sphere_cloud_at(center: Vector3<f64>, count: usize) -> ConvexBody {
    let golden_angle = std::f64::consts::PI * (3.0 - 5.0_f64.sqrt());
    let vertices: Vec<Point3<f64>> = (0..count)
        .map(|i| {
            let y = 1.0 - 2.0 * (i as f64 + 0.5) / count as f64;
            let ring_radius = (1.0 - y * y).sqrt();
            let theta = golden_angle * i as f64;
            Point3::new(ring_radius * theta.cos(), y, ring_radius * theta.sin())
        })
        .collect();
    let mut body = ConvexBody::new(vertices);
    body.update(Matrix4::new_translation(&center));
    body
}

pub fn bench_intersect(c: &mut Criterion) {
    let mut group = c.benchmark_group("gjk_intersect");
    group.measurement_time(std::time::Duration::from_secs(5));
    group.sample_size(100);

    let solver = GjkSolver::new();

    let cube = unit_cube_at(Vector3::zeros());
    let overlapping_cube = unit_cube_at(Vector3::new(0.5, 0.0, 0.0));
    let separated_cube = unit_cube_at(Vector3::new(3.0, 0.0, 0.0));

    group.bench_function("overlapping_cubes", |b| {
        b.iter(|| solver.intersect(&cube, &overlapping_cube))
    });

    group.bench_function("separated_cubes", |b| {
        b.iter(|| solver.intersect(&cube, &separated_cube))
    });

    let sphere = sphere_cloud_at(Vector3::zeros(), 64);
    let overlapping_sphere = sphere_cloud_at(Vector3::new(1.5, 0.0, 0.0), 64);
    let separated_sphere = sphere_cloud_at(Vector3::new(4.0, 0.0, 0.0), 64);

    group.bench_function("overlapping_spheres_64", |b| {
        b.iter(|| solver.intersect(&sphere, &overlapping_sphere))
    });

    group.bench_function("separated_spheres_64", |b| {
        b.iter(|| solver.intersect(&sphere, &separated_sphere))
    });

    group.finish();
}

criterion_group!(benches, bench_intersect);
criterion_main!(benches);
