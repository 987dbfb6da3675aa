use bevy::prelude::*;

use crate::plugins::FrameSet;
use crate::resources::{
    ClassicAxes, HandAxes, HandInputConfig, HandTracking, InputRouter, RoutedControls,
};
use crate::systems::{classic_input_system, hand_flight_input_system, input_router_system};

/// Wires the hand-pose and classic input sources into the router.
#[derive(Default)]
pub struct InputPlugin {
    pub hand_input: HandInputConfig,
}

impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(self.hand_input)
            .init_resource::<HandTracking>()
            .init_resource::<HandAxes>()
            .init_resource::<ClassicAxes>()
            .init_resource::<InputRouter>()
            .init_resource::<RoutedControls>();

        app.add_systems(
            Update,
            (
                (hand_flight_input_system, classic_input_system).in_set(FrameSet::SampleInput),
                input_router_system.in_set(FrameSet::RouteInput),
            ),
        );
    }
}
