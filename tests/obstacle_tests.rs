#![allow(missing_docs)]

use rockets::simulation::locatable::Locatable;
use rockets::simulation::obstacle::Obstacle;
use rockets::simulation::rocket::Rocket;
use rockets::simulation::vector::Vector;

fn rocket_at(x: f64, y: f64) -> Rocket {
    let mut rocket = Rocket::from_genome(vec![]);
    rocket.location = Vector::new(x, y);
    rocket
}

#[test]
fn test_collides_strictly_inside() {
    let obstacle = Obstacle::new(0.0, 0.0, 10.0, 10.0);

    assert!(obstacle.collides(&rocket_at(5.0, 5.0)));
    assert!(obstacle.collides(&rocket_at(0.001, 9.999)));
}

#[test]
fn test_edges_do_not_collide() {
    let obstacle = Obstacle::new(0.0, 0.0, 10.0, 10.0);

    assert!(!obstacle.collides(&rocket_at(10.0, 5.0)));
    assert!(!obstacle.collides(&rocket_at(0.0, 5.0)));
    assert!(!obstacle.collides(&rocket_at(5.0, 0.0)));
    assert!(!obstacle.collides(&rocket_at(5.0, 10.0)));
    assert!(!obstacle.collides(&rocket_at(0.0, 0.0)));
    assert!(!obstacle.collides(&rocket_at(10.0, 10.0)));
}

#[test]
fn test_outside_does_not_collide() {
    let obstacle = Obstacle::new(0.0, 0.0, 10.0, 10.0);

    assert!(!obstacle.collides(&rocket_at(-1.0, 5.0)));
    assert!(!obstacle.collides(&rocket_at(5.0, 11.0)));
    assert!(!obstacle.collides(&rocket_at(20.0, 20.0)));
}

#[test]
fn test_collides_with_any_locatable() {
    struct Marker {
        at: Vector,
    }

    impl Locatable for Marker {
        fn location(&self) -> &Vector {
            &self.at
        }

        fn update(&mut self) {}
    }

    let obstacle = Obstacle::new(-5.0, -5.0, 5.0, 5.0);
    assert!(obstacle.collides(&Marker { at: Vector::default() }));
    assert!(!obstacle.collides(&Marker {
        at: Vector::new(5.0, 0.0)
    }));
}

#[test]
fn test_collision_does_not_kill() {
    let obstacle = Obstacle::new(0.0, 0.0, 10.0, 10.0);
    let rocket = rocket_at(5.0, 5.0);

    assert!(obstacle.collides(&rocket));
    assert!(rocket.is_alive());
}

#[test]
fn test_to_int_tuple_uses_both_corners() {
    let obstacle = Obstacle::new(1.7, 2.2, 30.9, 40.5);

    assert_eq!(obstacle.to_int_tuple(0.0), ((1, 2), (30, 40)));
    assert_eq!(obstacle.to_int_tuple(0.5), ((2, 2), (31, 41)));
}

#[test]
fn test_is_well_formed() {
    assert!(Obstacle::new(0.0, 0.0, 1.0, 1.0).is_well_formed());
    assert!(!Obstacle::new(1.0, 0.0, 0.0, 1.0).is_well_formed());
    assert!(!Obstacle::new(0.0, 0.0, 0.0, 1.0).is_well_formed());
}
