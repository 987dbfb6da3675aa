use skyrings::components::SpatialComponent;
use skyrings::resources::GameSession;

/// Assert that a spatial component's state is valid
#[track_caller]
pub fn assert_spatial_valid(spatial: &SpatialComponent) {
    assert!(
        spatial.position.iter().all(|v| v.is_finite()),
        "Position is not finite: {:?}",
        spatial.position
    );
    assert!(
        spatial.velocity.iter().all(|v| v.is_finite()),
        "Velocity is not finite: {:?}",
        spatial.velocity
    );
    assert!(
        spatial.angular_velocity.iter().all(|v| v.is_finite()),
        "Angular velocity is not finite: {:?}",
        spatial.angular_velocity
    );
    let quat_norm = spatial.attitude.as_ref().norm();
    assert!(
        (quat_norm - 1.0).abs() < 1e-6,
        "Attitude quaternion is not normalized: norm = {}",
        quat_norm
    );
}

/// Assert the fuel invariant: 0 <= fuel <= max
#[track_caller]
pub fn assert_fuel_in_bounds(session: &GameSession) {
    assert!(
        session.fuel() >= 0.0,
        "Fuel below zero: {}",
        session.fuel()
    );
    assert!(
        session.fuel() <= session.max_fuel(),
        "Fuel {} above capacity {}",
        session.fuel(),
        session.max_fuel()
    );
}
