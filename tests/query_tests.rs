use drape::{ClothConfig, ClothMesh, Vec2};

fn cloth(cols: usize, rows: usize, spacing: f64) -> ClothMesh<f64> {
    ClothMesh::new(cols, rows, spacing, ClothConfig::new()).unwrap()
}

#[test]
fn nearest_particle_within_radius() {
    // Two particles 30 apart on the top row: (385, 60) and (415, 60).
    let mesh = cloth(2, 1, 30.0);
    let first = mesh.handle(0, 0).unwrap();
    assert_eq!(mesh.particle(first).unwrap().pos, Vec2::new(385.0, 60.0));

    // 14 from the first, 16 from the second.
    let hit = mesh.find_nearest_particle(Vec2::new(399.0, 60.0), 15.0);
    assert_eq!(hit, Some(first));

    let hit = mesh.find_nearest_particle(Vec2::new(401.0, 60.0), 15.0);
    assert_eq!(hit, mesh.handle(0, 1));
}

#[test]
fn radius_is_strict() {
    let mesh = cloth(2, 1, 30.0);
    assert_eq!(mesh.find_nearest_particle(Vec2::new(370.0, 60.0), 15.0), None);
    assert!(mesh.find_nearest_particle(Vec2::new(370.5, 60.0), 15.0).is_some());
}

#[test]
fn tie_goes_to_row_major_first() {
    let mesh = cloth(2, 1, 30.0);
    // Exactly between both particles.
    let hit = mesh.find_nearest_particle(Vec2::new(400.0, 60.0), 20.0);
    assert_eq!(hit, mesh.handle(0, 0));
}

#[test]
fn far_away_queries_find_nothing() {
    let mut mesh = cloth(5, 5, 10.0);
    let links = mesh.link_count();
    assert_eq!(mesh.find_nearest_particle(Vec2::new(-1e9, 1e9), 15.0), None);
    assert!(!mesh.sever_links_near(Vec2::new(-1e9, 1e9), 20.0));
    assert_eq!(mesh.link_count(), links);
}

#[test]
fn sever_uses_segment_distance() {
    let mut mesh = cloth(3, 1, 10.0);
    // Top row: (390, 60) (400, 60) (410, 60); links 0-1, 1-2, bend 0-2.
    assert_eq!(mesh.link_count(), 3);

    // Beyond the end of the row, within 20 only of the end particle.
    assert!(mesh.sever_links_near(Vec2::new(425.0, 60.0), 20.0));
    let left: Vec<_> = mesh.links().iter().map(|l| l.endpoints()).collect();
    assert_eq!(left, vec![(0, 1)]);
}

#[test]
fn severing_around_a_particle_isolates_it() {
    let mut mesh = cloth(3, 3, 10.0);
    let center = mesh.handle(1, 1).unwrap();
    let point = mesh.particle(center).unwrap().pos;
    assert_eq!(mesh.faces().count(), 8);

    assert!(mesh.sever_links_near(point, 1.0));

    // All 8 links at the center, plus both bend links passing through it.
    assert_eq!(mesh.link_count(), 26 - 10);
    assert!(mesh.links().iter().all(|l| !l.touches(center.index())));
    assert!(mesh.faces().all(|f| !f.vertices.contains(&center.index())));

    // Only the two faces built without the center survive.
    let faces: Vec<_> = mesh.faces().map(|f| f.vertices).collect();
    assert_eq!(faces, vec![[1, 2, 5], [3, 7, 6]]);
}

#[test]
fn cut_links_stay_cut() {
    let mut mesh = cloth(3, 3, 10.0);
    let point = mesh.particle_at(1, 1).unwrap().pos;
    mesh.sever_links_near(point, 1.0);
    let remaining = mesh.link_count();

    for _ in 0..10 {
        mesh.step(&mut drape::NoOpStepObserver);
    }
    assert!(mesh.link_count() <= remaining);
}
