use brickwork_core::{TileGrid, TileLayer, TileMap};
use brickwork_physics::rapier2d::prelude::*;
use brickwork_physics::{CollisionMap, PhysicsWorld2D, StaticCollider2D};
use rstest::rstest;

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

const LEVEL: &str = "
#........#
#...##...#
#........#
##########
";

// ---------------------------------------------------------------------------
// Body layout
// ---------------------------------------------------------------------------

#[test]
fn bodies_sit_at_rect_centres() {
    init_logger();
    let layer = TileLayer::from_ascii("collision", 2.0, 2.0, LEVEL).unwrap();
    let mut world = PhysicsWorld2D::default();

    let map = CollisionMap::build(&mut world, &layer, StaticCollider2D::default());

    let rects = map.geometry().rects();
    assert_eq!(map.bodies().len(), rects.len());
    for (handle, rect) in map.bodies().iter().zip(rects) {
        let body = world.body(*handle).unwrap();
        assert!(body.is_fixed());
        assert_eq!(world.body_translation(*handle), Some(rect.center()));

        let collider = &world.colliders[body.colliders()[0]];
        let half = collider.shape().as_cuboid().unwrap().half_extents;
        assert_eq!((half.x, half.y), rect.half_extents());
    }
}

#[test]
fn level_merges_walls_and_floor() {
    init_logger();
    let layer = TileLayer::from_ascii("collision", 1.0, 1.0, LEVEL).unwrap();
    let mut world = PhysicsWorld2D::default();

    let map = CollisionMap::build(&mut world, &layer, StaticCollider2D::default());

    // Floor, two walls and the floating ledge
    assert_eq!(map.bodies().len(), 4);
    assert_eq!(map.geometry().unit_rect_count(), layer.occupied_count());
    assert_eq!(map.geometry().total_area(), layer.occupied_count() as f32);
}

#[test]
fn empty_layer_creates_no_bodies() {
    init_logger();
    let layer = TileLayer::empty("collision", 8, 8, 1.0, 1.0).unwrap();
    let mut world = PhysicsWorld2D::default();

    let map = CollisionMap::build(&mut world, &layer, StaticCollider2D::default());

    assert!(map.bodies().is_empty());
    assert_eq!(world.bodies.len(), 0);
}

#[test]
fn collision_layer_picked_by_index() {
    init_logger();
    let map = TileMap::new(vec![
        TileLayer::from_ascii("background", 1.0, 1.0, "####\n####").unwrap(),
        TileLayer::from_ascii("collision", 1.0, 1.0, "....\n####").unwrap(),
    ]);
    let mut world = PhysicsWorld2D::default();

    let layer = map.layer(1).unwrap();
    let collision = CollisionMap::build(&mut world, layer, StaticCollider2D::default());

    assert_eq!(layer.width(), 4);
    assert_eq!(collision.bodies().len(), 1);
}

// ---------------------------------------------------------------------------
// Simulation
// ---------------------------------------------------------------------------

#[rstest]
#[case(2.5)]
#[case(5.0)]
#[case(7.5)]
fn falling_ball_rests_on_merged_floor(#[case] x: f32) {
    init_logger();
    let layer = TileLayer::from_ascii("collision", 1.0, 1.0, LEVEL).unwrap();
    let mut world = PhysicsWorld2D::with_gravity(vector![0.0, -10.0]);
    let _map = CollisionMap::build(&mut world, &layer, StaticCollider2D::default());

    // The ledge covers x in [4, 6) at y in [2, 3); start under it there.
    let start_y = if (4.0..6.0).contains(&x) { 1.6 } else { 3.5 };
    let ball = world.add_body(
        RigidBodyBuilder::dynamic()
            .translation(vector![x, start_y])
            .build(),
    );
    world.add_collider(ColliderBuilder::ball(0.25).build(), ball);

    for _ in 0..300 {
        world.step();
    }

    let (bx, by) = world.body_translation(ball).unwrap();
    assert!((bx - x).abs() < 0.05, "ball drifted to x = {bx}");
    assert!(by > 1.1 && by < 1.4, "ball ended at y = {by}");
}
