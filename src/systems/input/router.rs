use bevy::prelude::*;

use crate::components::ControlSignal;
use crate::resources::{ClassicAxes, HandAxes, InputRouter, RoutedControls};

/// Fuses the enabled input sources into the authoritative control triple.
pub fn input_router_system(
    router: Res<InputRouter>,
    hand: Res<HandAxes>,
    classic: Res<ClassicAxes>,
    mut routed: ResMut<RoutedControls>,
) {
    routed.0 = route_controls(&router, &hand.0, &classic.0);
}

/// Per-axis additive fusion. A disabled source contributes exactly zero;
/// no renormalisation is applied, so co-driving sources may push an axis
/// beyond [-1, 1] and torque scaling downstream absorbs it.
pub fn route_controls(
    router: &InputRouter,
    hand: &ControlSignal,
    classic: &ControlSignal,
) -> ControlSignal {
    let mut fused = ControlSignal::NEUTRAL;
    if router.hand_enabled {
        fused = fused.add(hand);
    }
    if router.classic_enabled {
        fused = fused.add(classic);
    }
    fused
}
