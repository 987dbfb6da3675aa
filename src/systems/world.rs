use bevy::prelude::*;
use nalgebra::Vector3;

use crate::components::{
    FuelCheckpoint, PlayerController, SpatialComponent, TriggerVolume, TurbulenceHazard,
    WinTrigger,
};
use crate::resources::{GameOverReason, GameSession};

/// Event emitted when the plane collects a fuel ring.
#[derive(Event, Debug, Clone, Copy)]
pub struct CheckpointCollected {
    pub entity: Entity,
    pub fuel_reward: f64,
}

/// Event emitted when the plane hits a turbulence hazard.
#[derive(Event, Debug, Clone, Copy)]
pub struct HazardStruck {
    pub entity: Entity,
    pub fuel_penalty: f64,
}

/// True when `position` lies inside the trigger sphere at `center`.
#[inline]
pub fn overlaps(position: &Vector3<f64>, center: &Vector3<f64>, radius: f64) -> bool {
    (position - center).norm() <= radius
}

/// Collects active fuel checkpoints the plane flies through: awards fuel
/// and score, lifts the plane, and disarms the ring.
pub fn checkpoint_system(
    mut session: ResMut<GameSession>,
    mut player: Query<&mut SpatialComponent, With<PlayerController>>,
    mut checkpoints: Query<
        (Entity, &SpatialComponent, &TriggerVolume, &mut FuelCheckpoint),
        Without<PlayerController>,
    >,
    mut events: EventWriter<CheckpointCollected>,
) {
    if !session.is_playing() {
        return;
    }
    let Ok(mut player_spatial) = player.get_single_mut() else {
        return;
    };

    for (entity, spatial, volume, mut checkpoint) in checkpoints.iter_mut() {
        if !checkpoint.active
            || !overlaps(&player_spatial.position, &spatial.position, volume.radius)
        {
            continue;
        }

        info!("Checkpoint collected, +{} fuel", checkpoint.fuel_reward);
        session.add_fuel(checkpoint.fuel_reward);
        // Up is -z in the NED-style world frame
        player_spatial.velocity.z -= checkpoint.collect_impulse;
        checkpoint.collect();
        events.send(CheckpointCollected {
            entity,
            fuel_reward: checkpoint.fuel_reward,
        });
    }
}

/// Counts down disarmed checkpoints and re-enables them once their respawn
/// delay has elapsed. Single-use rings (zero delay) stay disarmed. The
/// timer only runs while the session is live, so pausing freezes respawns.
pub fn checkpoint_respawn_system(
    time: Res<Time>,
    session: Res<GameSession>,
    mut checkpoints: Query<&mut FuelCheckpoint>,
) {
    if !session.is_playing() {
        return;
    }
    let dt = time.delta_secs_f64();
    for mut checkpoint in checkpoints.iter_mut() {
        if checkpoint.active || checkpoint.respawn_delay <= 0.0 {
            continue;
        }
        checkpoint.respawn_timer -= dt;
        if checkpoint.respawn_timer <= 0.0 {
            debug!("Checkpoint respawned");
            checkpoint.active = true;
        }
    }
}

/// Applies hazard contact: a fuel penalty plus a knockback impulse away
/// from the hazard centre. A short cooldown stands in for the edge-triggered
/// contact of a collision engine while the plane stays inside the region.
pub fn hazard_system(
    time: Res<Time>,
    mut session: ResMut<GameSession>,
    mut player: Query<&mut SpatialComponent, With<PlayerController>>,
    mut hazards: Query<
        (Entity, &SpatialComponent, &TriggerVolume, &mut TurbulenceHazard),
        Without<PlayerController>,
    >,
    mut events: EventWriter<HazardStruck>,
) {
    if !session.is_playing() {
        return;
    }
    let dt = time.delta_secs_f64();
    for (_, _, _, mut hazard) in hazards.iter_mut() {
        hazard.cooldown_timer = (hazard.cooldown_timer - dt).max(0.0);
    }
    let Ok(mut player_spatial) = player.get_single_mut() else {
        return;
    };

    for (entity, spatial, volume, mut hazard) in hazards.iter_mut() {
        if hazard.cooldown_timer > 0.0
            || !overlaps(&player_spatial.position, &spatial.position, volume.radius)
        {
            continue;
        }

        warn!("Hit turbulence, -{} fuel", hazard.fuel_penalty);
        session.consume_fuel(hazard.fuel_penalty);

        let away = player_spatial.position - spatial.position;
        if away.norm() > 1e-9 {
            player_spatial.velocity += away.normalize() * hazard.knockback_force;
        }
        hazard.cooldown_timer = hazard.hit_cooldown;
        events.send(HazardStruck {
            entity,
            fuel_penalty: hazard.fuel_penalty,
        });
    }
}

/// Ends the session with a win the first time the plane reaches the goal.
pub fn win_trigger_system(
    mut session: ResMut<GameSession>,
    player: Query<&SpatialComponent, With<PlayerController>>,
    mut triggers: Query<
        (&SpatialComponent, &TriggerVolume, &mut WinTrigger),
        Without<PlayerController>,
    >,
) {
    if !session.is_playing() {
        return;
    }
    let Ok(player_spatial) = player.get_single() else {
        return;
    };

    for (spatial, volume, mut trigger) in triggers.iter_mut() {
        if trigger.consumed
            || !overlaps(&player_spatial.position, &spatial.position, volume.radius)
        {
            continue;
        }

        trigger.consumed = true;
        session.trigger_game_over(GameOverReason::CourseComplete);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlap_boundary() {
        let center = Vector3::new(10.0, 0.0, 0.0);
        assert!(overlaps(&Vector3::new(12.0, 0.0, 0.0), &center, 2.0));
        assert!(!overlaps(&Vector3::new(12.1, 0.0, 0.0), &center, 2.0));
    }

    #[test]
    fn test_checkpoint_collect_arms_respawn() {
        let mut checkpoint = FuelCheckpoint {
            respawn_delay: 5.0,
            ..FuelCheckpoint::default()
        };
        checkpoint.collect();
        assert!(!checkpoint.active);
        assert_eq!(checkpoint.respawn_timer, 5.0);
    }

    #[test]
    fn test_single_use_checkpoint_stays_disarmed() {
        let mut checkpoint = FuelCheckpoint::default();
        checkpoint.collect();
        assert!(!checkpoint.active);
        assert_eq!(checkpoint.respawn_timer, 0.0);
    }
}
