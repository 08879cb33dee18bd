use bevy::prelude::*;
use dg_core::RegionId;
use dg_world::Universe;

pub mod anchor;
pub mod category;
pub mod config;
pub mod dedupe;
pub mod orchestrator;
pub mod placement;
pub mod report;
pub mod snapshot;
pub mod spawner;
pub mod template;

pub use anchor::{find_anchors, indexed_gates, Anchor, AnchorKind};
pub use category::{Dedup, DedupOrigin, PropCategory};
pub use config::{DecorConfig, DedupScope, GateLayout};
pub use orchestrator::{activate_region, decorate_belts, decorate_gates, spawn_gate_environment};
pub use placement::{OffsetRange, Placement, PlacementRng, Spread};
pub use report::DecorationReport;
pub use snapshot::{EntitySnapshot, SnapshotRecord};
pub use spawner::spawn_static;
pub use template::{EnvironmentTemplate, TemplateCategory};

/// Sent when a solar system goes live and should be decorated.
#[derive(Event, Debug, Clone, Copy)]
pub struct RegionActivated {
    pub region: RegionId,
}

/// Sent after a system has been decorated.
#[derive(Event, Debug, Clone)]
pub struct RegionDecorated {
    pub region: RegionId,
    pub report: DecorationReport,
}

/// Decoration plugin for Driftgate.
/// Populates gates and belts with markers, sentries and patrols when a
/// system is activated.
pub struct DgDecorPlugin;

impl Plugin for DgDecorPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DecorConfig>()
            .init_resource::<EnvironmentTemplate>()
            .init_resource::<Universe>()
            .add_event::<RegionActivated>()
            .add_event::<RegionDecorated>()
            .add_systems(Update, decorate_activated_regions);
    }
}

/// Run one decoration pass for every system activated this frame.
pub fn decorate_activated_regions(
    mut activated: EventReader<RegionActivated>,
    mut universe: ResMut<Universe>,
    config: Res<DecorConfig>,
    template: Res<EnvironmentTemplate>,
    mut decorated: EventWriter<RegionDecorated>,
) {
    for event in activated.read() {
        let Some(system) = universe.get_mut(event.region) else {
            warn!("Activated system {} is not loaded; not decorated.", event.region);
            continue;
        };

        let report = activate_region(system, &config, &template);
        decorated.send(RegionDecorated {
            region: event.region,
            report,
        });
    }
}
