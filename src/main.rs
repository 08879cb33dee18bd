use bevy::log::LogPlugin;
use bevy::prelude::*;
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use dg_decor::{RegionActivated, RegionDecorated};
use dg_persistence::load_universe;
use dg_world::{Universe, UniverseDefinition};
use std::path::PathBuf;

/// Decorate every system in a universe once and log what was placed.
#[derive(Parser, Debug)]
#[command(name = "driftgate", version, about)]
struct Args {
    /// Universe definition (RON). The built-in demo universe is used when omitted.
    universe: Option<PathBuf>,
}

fn main() {
    let args = Args::parse();

    let definition = match &args.universe {
        Some(path) => load_universe(path).unwrap_or_else(|e| {
            Args::command()
                .error(
                    ErrorKind::Io,
                    format!("failed to load universe from {}: {}", path.display(), e),
                )
                .exit()
        }),
        None => UniverseDefinition::demo(),
    };

    let mut app = App::new();
    app.add_plugins((MinimalPlugins, LogPlugin::default()))
        .insert_resource(Universe::from_definition(&definition))
        // Plugins
        .add_plugins((
            dg_core::DgCorePlugin,
            dg_world::DgWorldPlugin,
            dg_persistence::DgPersistencePlugin::default(),
            dg_decor::DgDecorPlugin,
        ))
        .add_systems(Startup, activate_all_systems)
        .add_systems(
            Update,
            log_decorated_systems.after(dg_decor::decorate_activated_regions),
        );

    // One frame: Startup sends the activations, Update decorates and reports.
    app.update();
}

/// Activate every loaded system once.
fn activate_all_systems(universe: Res<Universe>, mut activated: EventWriter<RegionActivated>) {
    info!("Activating {} systems.", universe.len());
    for region in universe.ids() {
        activated.send(RegionActivated { region });
    }
}

fn log_decorated_systems(universe: Res<Universe>, mut decorated: EventReader<RegionDecorated>) {
    for event in decorated.read() {
        let entities = universe
            .get(event.region)
            .map(|system| system.entity_count())
            .unwrap_or_default();
        info!(
            "System {}: {} ({} entities now).",
            event.region, event.report, entities
        );
    }
}
