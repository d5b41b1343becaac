use nalgebra::Vector3;

use crate::models::Simplex;

#[test]
fn test_new_simplex_is_empty() {
    let simplex = Simplex::new();
    assert_eq!(simplex.len(), 0);
    assert!(simplex.is_empty());
}

#[test]
fn test_push_keeps_newest_first() {
    let mut simplex = Simplex::new();
    let first = Vector3::new(1.0, 0.0, 0.0);
    let second = Vector3::new(0.0, 1.0, 0.0);
    let third = Vector3::new(0.0, 0.0, 1.0);

    simplex.push(first);
    simplex.push(second);
    simplex.push(third);

    assert_eq!(simplex.len(), 3);
    assert_eq!(simplex.get_a(), third, "Slot A must hold the newest point");
    assert_eq!(simplex.get_b(), second);
    assert_eq!(simplex.get_c(), first, "Older points shift toward the back");
}

#[test]
fn test_set_ab_overwrites_whole_simplex() {
    let mut simplex = Simplex::new();
    simplex.push(Vector3::new(9.0, 9.0, 9.0));
    simplex.push(Vector3::new(8.0, 8.0, 8.0));
    simplex.push(Vector3::new(7.0, 7.0, 7.0));

    let a = Vector3::new(1.0, 2.0, 3.0);
    let b = Vector3::new(4.0, 5.0, 6.0);
    simplex.set_ab(a, b);

    assert_eq!(simplex.len(), 2);
    assert_eq!(simplex.get_a(), a);
    assert_eq!(simplex.get_b(), b);
}

#[test]
fn test_set_abc_then_push_builds_tetrahedron() {
    let mut simplex = Simplex::new();
    let a = Vector3::new(1.0, 0.0, 0.0);
    let b = Vector3::new(0.0, 1.0, 0.0);
    let c = Vector3::new(0.0, 0.0, 1.0);
    simplex.set_abc(a, b, c);
    assert_eq!(simplex.len(), 3);

    let apex = Vector3::new(-1.0, -1.0, -1.0);
    simplex.push(apex);

    assert_eq!(simplex.len(), 4);
    assert_eq!(simplex.get_a(), apex);
    assert_eq!(simplex.get_b(), a);
    assert_eq!(simplex.get_c(), b);
    assert_eq!(simplex.get_d(), c);
}
