use polyzone_core::geometry::Point;
use polyzone_editor::shape_store::ShapeStore;

const TOLERANCE: f64 = 50.0;

fn triangle_points() -> Vec<Point> {
    vec![
        Point::new(0.0, 0.0),
        Point::new(10.0, 0.0),
        Point::new(5.0, 10.0),
    ]
}

#[test]
fn test_insert_assigns_sequential_ids() {
    let mut store = ShapeStore::new();
    let a = store.insert(triangle_points()).unwrap();
    let b = store.insert(triangle_points()).unwrap();
    assert_eq!(a, 1);
    assert_eq!(b, 2);
    assert_eq!(store.len(), 2);
}

#[test]
fn test_insert_rejects_too_few_points() {
    let mut store = ShapeStore::new();
    assert!(store.insert([Point::new(0.0, 0.0)]).is_err());
    assert!(store.is_empty());
}

#[test]
fn test_insert_centered_places_visual_center_on_target() {
    let mut store = ShapeStore::new();
    let id = store
        .insert_centered(triangle_points(), Point::new(100.0, 100.0))
        .unwrap();

    let bounds = store.get(id).unwrap().bounding_box();
    assert!((bounds.center().x - 100.0).abs() < 1e-9);
    assert!((bounds.center().y - 100.0).abs() < 1e-9);
}

#[test]
fn test_insert_centered_symmetric_shape_centroid_on_target() {
    let mut store = ShapeStore::new();
    let square = vec![
        Point::new(0.0, 0.0),
        Point::new(10.0, 0.0),
        Point::new(10.0, 10.0),
        Point::new(0.0, 10.0),
    ];
    let id = store
        .insert_centered(square, Point::new(100.0, 100.0))
        .unwrap();

    let c = store.centroid_of(id).unwrap();
    assert!((c.x - 100.0).abs() < 1e-9);
    assert!((c.y - 100.0).abs() < 1e-9);
}

#[test]
fn test_hit_test_nearest_vertex_within_tolerance() {
    let mut store = ShapeStore::new();
    let a = store.insert(triangle_points()).unwrap();
    let b = store
        .insert(triangle_points().iter().map(|p| p.translated(200.0, 0.0)))
        .unwrap();

    assert_eq!(store.hit_test(&Point::new(4.0, 9.0), TOLERANCE), Some(a));
    assert_eq!(store.hit_test(&Point::new(206.0, 1.0), TOLERANCE), Some(b));
}

#[test]
fn test_hit_test_far_point_returns_none() {
    let mut store = ShapeStore::new();
    store.insert(triangle_points()).unwrap();
    assert_eq!(store.hit_test(&Point::new(1000.0, 1000.0), TOLERANCE), None);
}

#[test]
fn test_hit_test_on_empty_store() {
    let store = ShapeStore::new();
    assert_eq!(store.hit_test(&Point::new(0.0, 0.0), TOLERANCE), None);
}

#[test]
fn test_hit_test_topmost_wins_distance_ties() {
    let mut store = ShapeStore::new();
    let _bottom = store.insert(triangle_points()).unwrap();
    let top = store.insert(triangle_points()).unwrap();

    // Identical geometry: the later-inserted (topmost) shape must win.
    assert_eq!(store.hit_test(&Point::new(1.0, 1.0), TOLERANCE), Some(top));
}

#[test]
fn test_translate_moves_only_target_shape() {
    let mut store = ShapeStore::new();
    let a = store.insert(triangle_points()).unwrap();
    let b = store.insert(triangle_points()).unwrap();

    store.translate(a, 5.0, 7.0);

    assert_eq!(store.get(a).unwrap().points()[0], Point::new(5.0, 7.0));
    assert_eq!(store.get(b).unwrap().points()[0], Point::new(0.0, 0.0));
}

#[test]
fn test_bounding_box_all() {
    let mut store = ShapeStore::new();
    assert!(store.bounding_box_all().is_none());

    store.insert(triangle_points()).unwrap();
    store
        .insert(triangle_points().iter().map(|p| p.translated(90.0, 40.0)))
        .unwrap();

    let bounds = store.bounding_box_all().unwrap();
    assert_eq!(bounds.min_x, 0.0);
    assert_eq!(bounds.min_y, 0.0);
    assert_eq!(bounds.max_x, 100.0);
    assert_eq!(bounds.max_y, 50.0);
}

#[test]
fn test_load_drops_malformed_entries() {
    let mut store = ShapeStore::new();
    store.load(&[
        "0,0 10,0 5,10".to_string(),
        "garbage".to_string(),
        "1,1 2,2".to_string(), // too few vertices
        "20,20 30,20 25,30".to_string(),
    ]);
    assert_eq!(store.len(), 2);
}

#[test]
fn test_load_replaces_existing_shapes() {
    let mut store = ShapeStore::new();
    store.insert(triangle_points()).unwrap();
    store.load(&["0,0 10,0 5,10".to_string()]);
    assert_eq!(store.len(), 1);
}

#[test]
fn test_export_all_in_draw_order() {
    let mut store = ShapeStore::new();
    store.insert(triangle_points()).unwrap();
    store
        .insert(triangle_points().iter().map(|p| p.translated(1.0, 1.0)))
        .unwrap();

    let exported = store.export_all();
    assert_eq!(exported.len(), 2);
    assert_eq!(exported[0], "0,0 10,0 5,10");
    assert_eq!(exported[1], "1,1 11,1 6,11");
}

#[test]
fn test_clear_keeps_id_sequence() {
    let mut store = ShapeStore::new();
    store.insert(triangle_points()).unwrap();
    store.clear();
    assert!(store.is_empty());

    let next = store.insert(triangle_points()).unwrap();
    assert_eq!(next, 2); // IDs are never reused
}
