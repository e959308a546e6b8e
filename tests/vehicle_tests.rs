//! Vehicle kinematics tests
//!
//! Speed limits, turning authority, heading wrap and the one-shot
//! brake/reset commands.

use intersection_drive::simulation::{
    chase_camera_offset, HeadingLabel, Intent, Intents, SimVehicle, VehicleTuning,
    DEFAULT_VEHICLE_HEADING, DEFAULT_VEHICLE_POSITION,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn approx_eq(a: f32, b: f32, tolerance: f32) -> bool {
    (a - b).abs() <= tolerance
}

#[test]
fn test_vehicle_defaults() {
    let vehicle = SimVehicle::new();
    assert_eq!(vehicle.position, DEFAULT_VEHICLE_POSITION);
    assert_eq!(vehicle.heading, 180.0);
    assert_eq!(vehicle.heading_label, HeadingLabel::South);
    assert_eq!(vehicle.speed, 0.0);
    assert_eq!(vehicle.turn_interpolation, 0.0);
    assert_eq!(vehicle.intents, Intents::default());
}

#[test]
fn test_forward_speed_increases_until_max() {
    let tuning = VehicleTuning::default();
    let mut vehicle = SimVehicle::new();
    vehicle.set_intent(Intent::Forward, true);

    let mut previous = vehicle.speed;
    for _ in 0..120 {
        vehicle.advance(&tuning);
        if previous < tuning.max_speed {
            assert!(
                vehicle.speed > previous,
                "Speed did not increase: {} -> {}",
                previous,
                vehicle.speed
            );
        } else {
            assert_eq!(vehicle.speed, tuning.max_speed);
        }
        assert!(vehicle.speed <= tuning.max_speed);
        previous = vehicle.speed;
    }
    assert_eq!(vehicle.speed, tuning.max_speed);
}

#[test]
fn test_reverse_speed_capped_at_half_max() {
    let tuning = VehicleTuning::default();
    let mut vehicle = SimVehicle::new();
    vehicle.set_intent(Intent::Backward, true);

    for _ in 0..200 {
        vehicle.advance(&tuning);
        assert!(vehicle.speed >= -tuning.max_speed / 2.0);
    }
    assert_eq!(vehicle.speed, -tuning.max_speed / 2.0);
}

#[test]
fn test_forward_wins_over_backward() {
    let tuning = VehicleTuning::default();
    let mut vehicle = SimVehicle::new();
    vehicle.set_intent(Intent::Forward, true);
    vehicle.set_intent(Intent::Backward, true);

    vehicle.advance(&tuning);
    assert!(approx_eq(vehicle.speed, tuning.acceleration, 1e-6));
}

#[test]
fn test_coasting_decays_without_overshoot() {
    let tuning = VehicleTuning::default();

    for start in [0.3f32, 0.5, 0.0123, -0.25, -0.001] {
        let mut vehicle = SimVehicle::new();
        vehicle.speed = start;

        let mut previous = start;
        for _ in 0..200 {
            vehicle.advance(&tuning);
            if start > 0.0 {
                assert!(vehicle.speed >= 0.0, "Positive speed flipped sign");
                assert!(vehicle.speed <= previous);
            } else {
                assert!(vehicle.speed <= 0.0, "Negative speed flipped sign");
                assert!(vehicle.speed >= previous);
            }
            previous = vehicle.speed;
        }
        assert_eq!(vehicle.speed, 0.0, "Speed from {} never settled", start);
    }
}

#[test]
fn test_turn_rate_blends_with_speed() {
    let tuning = VehicleTuning::default();

    assert!(approx_eq(tuning.turn_rate_at(0.0), 6.0, 1e-6));
    assert!(approx_eq(tuning.turn_rate_at(0.5), 2.0, 1e-6));
    assert!(approx_eq(tuning.turn_rate_at(0.25), 4.0, 1e-6));
    // Reversing uses the magnitude of speed
    assert!(approx_eq(tuning.turn_rate_at(-0.25), 4.0, 1e-6));

    let doubled = VehicleTuning {
        turn_speed_multiplier: 2.0,
        ..tuning
    };
    assert!(approx_eq(doubled.turn_rate_at(0.0), 12.0, 1e-6));
}

#[test]
fn test_turning_eases_in() {
    let tuning = VehicleTuning::default();
    let mut vehicle = SimVehicle::new();
    vehicle.set_intent(Intent::TurnLeft, true);

    // Stationary, so the full 6°/tick rate applies, scaled by the ramp
    vehicle.advance(&tuning);
    assert!(approx_eq(vehicle.turn_interpolation, 0.2, 1e-6));
    assert!(approx_eq(vehicle.heading, 181.2, 1e-4));

    vehicle.advance(&tuning);
    assert!(approx_eq(vehicle.turn_interpolation, 0.4, 1e-6));
    assert!(approx_eq(vehicle.heading, 183.6, 1e-4));

    for _ in 0..10 {
        vehicle.advance(&tuning);
    }
    assert_eq!(vehicle.turn_interpolation, 1.0);
}

#[test]
fn test_turning_eases_out_without_turning() {
    let tuning = VehicleTuning::default();
    let mut vehicle = SimVehicle::new();
    vehicle.set_intent(Intent::TurnRight, true);
    for _ in 0..5 {
        vehicle.advance(&tuning);
    }
    assert_eq!(vehicle.turn_interpolation, 1.0);

    vehicle.set_intent(Intent::TurnRight, false);
    let heading = vehicle.heading;
    vehicle.advance(&tuning);
    assert!(approx_eq(vehicle.turn_interpolation, 0.9, 1e-6));
    assert_eq!(vehicle.heading, heading);

    for _ in 0..20 {
        vehicle.advance(&tuning);
    }
    assert_eq!(vehicle.turn_interpolation, 0.0);
}

#[test]
fn test_right_turn_reduces_heading() {
    let tuning = VehicleTuning::default();
    let mut vehicle = SimVehicle::new();
    vehicle.set_intent(Intent::TurnRight, true);
    vehicle.advance(&tuning);
    assert!(approx_eq(vehicle.heading, 178.8, 1e-4));
}

#[test]
fn test_opposite_turns_cancel() {
    let tuning = VehicleTuning::default();
    let mut vehicle = SimVehicle::new();
    vehicle.set_intent(Intent::TurnLeft, true);
    vehicle.set_intent(Intent::TurnRight, true);

    for _ in 0..20 {
        vehicle.advance(&tuning);
    }
    assert!(approx_eq(vehicle.heading, DEFAULT_VEHICLE_HEADING, 1e-3));
}

#[test]
fn test_heading_wraps_into_range() {
    let tuning = VehicleTuning::default();

    let mut vehicle = SimVehicle::new();
    vehicle.heading = 359.0;
    vehicle.set_intent(Intent::TurnLeft, true);
    for _ in 0..5 {
        vehicle.advance(&tuning);
        assert!((0.0..360.0).contains(&vehicle.heading));
    }
    assert!(vehicle.heading < 180.0, "Left turn past north should wrap low");

    let mut vehicle = SimVehicle::new();
    vehicle.heading = 0.5;
    vehicle.set_intent(Intent::TurnRight, true);
    for _ in 0..5 {
        vehicle.advance(&tuning);
        assert!((0.0..360.0).contains(&vehicle.heading));
    }
    assert!(vehicle.heading > 180.0, "Right turn past north should wrap high");
}

#[test]
fn test_heading_stays_in_range_for_random_inputs() {
    let tuning = VehicleTuning::default();
    let mut rng = StdRng::seed_from_u64(42);
    let mut vehicle = SimVehicle::new();
    vehicle.heading = rng.random_range(0.0..360.0);

    for _ in 0..5000 {
        vehicle.set_intent(Intent::Forward, rng.random_bool(0.5));
        vehicle.set_intent(Intent::Backward, rng.random_bool(0.3));
        vehicle.set_intent(Intent::TurnLeft, rng.random_bool(0.4));
        vehicle.set_intent(Intent::TurnRight, rng.random_bool(0.4));
        vehicle.advance(&tuning);

        assert!((0.0..360.0).contains(&vehicle.heading));
        assert!(vehicle.speed <= tuning.max_speed);
        assert!(vehicle.speed >= -tuning.max_speed / 2.0);
        assert!((0.0..=1.0).contains(&vehicle.turn_interpolation));
    }
}

#[test]
fn test_position_follows_heading() {
    let tuning = VehicleTuning::default();
    let mut vehicle = SimVehicle::new();
    vehicle.speed = 0.3;
    let start = vehicle.position;

    vehicle.advance(&tuning);

    let dx = vehicle.position.x - start.x;
    let dz = vehicle.position.z - start.z;
    assert!(approx_eq(dx, 0.0, 1e-5));
    // Coasting trims the speed before it is applied
    assert!(approx_eq(dz, -vehicle.speed, 1e-5));
    assert!(approx_eq(dz, -0.3, 0.01));
    assert_eq!(vehicle.position.y, start.y);
}

#[test]
fn test_position_east_heading_moves_along_x() {
    let tuning = VehicleTuning::default();
    let mut vehicle = SimVehicle::new();
    vehicle.heading = 90.0;
    vehicle.set_intent(Intent::Forward, true);
    let start = vehicle.position;

    for _ in 0..10 {
        vehicle.advance(&tuning);
    }
    assert!(vehicle.position.x > start.x);
    assert!(approx_eq(vehicle.position.z, start.z, 1e-4));
}

#[test]
fn test_heading_labels() {
    let cases = [
        (0.0, HeadingLabel::North),
        (44.9, HeadingLabel::North),
        (45.0, HeadingLabel::East),
        (134.9, HeadingLabel::East),
        (135.0, HeadingLabel::South),
        (224.9, HeadingLabel::South),
        (225.0, HeadingLabel::West),
        (314.9, HeadingLabel::West),
        (315.0, HeadingLabel::North),
        (359.9, HeadingLabel::North),
    ];
    for (heading, label) in cases {
        assert_eq!(HeadingLabel::from_degrees(heading), label, "heading {}", heading);
    }
}

#[test]
fn test_label_updates_on_tick() {
    let tuning = VehicleTuning::default();
    let mut vehicle = SimVehicle::new();
    vehicle.set_intent(Intent::TurnLeft, true);
    for _ in 0..20 {
        vehicle.advance(&tuning);
    }
    // 180 + 1.2 + 2.4 + 3.6 + 4.8 + 16 * 6 > 225
    assert_eq!(vehicle.heading_label, HeadingLabel::West);
}

#[test]
fn test_turn_edge_refreshes_camera_offset() {
    let mut vehicle = SimVehicle::new();
    vehicle.heading = 90.0;
    assert_eq!(vehicle.camera_offset, chase_camera_offset(180.0));

    vehicle.set_intent(Intent::TurnLeft, true);
    let expected = chase_camera_offset(90.0);
    assert!(approx_eq(vehicle.camera_offset.x, expected.x, 1e-5));
    assert!(approx_eq(vehicle.camera_offset.z, expected.z, 1e-5));
}

#[test]
fn test_brake_stops_and_clears_longitudinal_intents() {
    let tuning = VehicleTuning::default();
    let mut vehicle = SimVehicle::new();
    vehicle.set_intent(Intent::Forward, true);
    vehicle.set_intent(Intent::TurnLeft, true);
    for _ in 0..30 {
        vehicle.advance(&tuning);
    }
    assert!(vehicle.speed > 0.0);

    vehicle.brake();
    assert_eq!(vehicle.speed, 0.0);
    assert!(!vehicle.intents.forward);
    assert!(!vehicle.intents.backward);
    assert!(vehicle.intents.turn_left, "Brake leaves steering alone");

    let position = vehicle.position;
    vehicle.advance(&tuning);
    assert_eq!(vehicle.position.x, position.x);
    assert_eq!(vehicle.position.z, position.z);
}

#[test]
fn test_reset_restores_defaults() {
    let tuning = VehicleTuning::default();
    let mut vehicle = SimVehicle::new();
    vehicle.set_intent(Intent::Forward, true);
    vehicle.set_intent(Intent::TurnRight, true);
    for _ in 0..100 {
        vehicle.advance(&tuning);
    }
    vehicle.set_intent(Intent::Backward, true);

    vehicle.reset();
    assert_eq!(vehicle.position, DEFAULT_VEHICLE_POSITION);
    assert_eq!(vehicle.heading, 180.0);
    assert_eq!(vehicle.speed, 0.0);
    assert_eq!(vehicle.turn_interpolation, 0.0);
    assert_eq!(vehicle.intents, Intents::default());
    assert_eq!(vehicle.heading_label, HeadingLabel::South);
}
