mod content;
mod core;
#[cfg(feature = "dev-tools")]
mod debug;
mod entities;
mod simulation;
mod view;
mod world;

use bevy::prelude::*;

fn main() {
    let mut app = App::new();
    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Maze Runner".to_string(),
            resolution: (1280, 720).into(),
            resizable: true,
            ..default()
        }),
        ..default()
    }))
    .add_plugins((
        content::ContentPlugin,
        core::CorePlugin,
        world::WorldPlugin,
        simulation::SimulationPlugin,
        view::ViewPlugin,
    ));

    #[cfg(feature = "dev-tools")]
    app.add_plugins(debug::DebugPlugin);

    app.run();
}
