use avian2d::prelude::*;
use bevy::prelude::*;

use crate::common::tunables::Tunables;

pub fn plugin(app: &mut App) {
    let tunables = app.world().resource::<Tunables>();
    let (ppm, gravity) = (tunables.pixels_per_meter, tunables.gravity);

    app.add_plugins(PhysicsPlugins::default().with_length_unit(ppm));
    app.insert_resource(Gravity(Vec2::NEG_Y * gravity));
}
