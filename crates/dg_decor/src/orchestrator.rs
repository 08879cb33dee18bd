//! Per-system decoration passes.
//!
//! Each pass discovers its anchors, snapshots the system once, then walks the
//! anchors in registry order placing every enabled category in turn. Dedup
//! checks read the snapshot (and, in cumulative scope, the pass's own spawns);
//! they never re-read the live system mid-pass.

use bevy::log::{debug, info, warn};
use dg_core::RegionClass;
use dg_world::Region;

use crate::anchor::{find_anchors, indexed_gates, Anchor, AnchorKind};
use crate::category::{belt_categories, gate_categories, PropCategory};
use crate::config::{DecorConfig, DedupScope, GateLayout};
use crate::dedupe::DedupIndex;
use crate::report::DecorationReport;
use crate::snapshot::EntitySnapshot;
use crate::spawner::spawn_static;
use crate::template::EnvironmentTemplate;

/// Run the configured gate layout and then belt patrols on one system.
pub fn activate_region<R: Region + ?Sized>(
    region: &mut R,
    config: &DecorConfig,
    template: &EnvironmentTemplate,
) -> DecorationReport {
    info!("Decorating system {} ({}).", region.id(), region.name());

    let gates = match config.gate_layout {
        GateLayout::Scattered => decorate_gates(region, config),
        GateLayout::Template => spawn_gate_environment(region, template, config),
    };
    let report = gates.merge(decorate_belts(region, config));

    info!(
        "Finished decorating system {} ({}): {}.",
        region.id(),
        region.name(),
        report
    );
    report
}

/// One marker per gate at a seeded offset unless one is already near, plus
/// `patrols_per_gate` patrols per gate.
pub fn decorate_gates<R: Region + ?Sized>(region: &mut R, config: &DecorConfig) -> DecorationReport {
    let categories = gate_categories(config);
    if categories.is_empty() || excluded_class(&*region, config) {
        return DecorationReport::skipped();
    }

    let gates = find_anchors(&*region, AnchorKind::Gate);
    if gates.is_empty() {
        info!("System {} has no stargates; no gate decoration.", region.id());
        return DecorationReport::skipped();
    }

    let snapshot = EntitySnapshot::capture(&*region);
    decorate_anchors(region, &gates, &categories, &snapshot, config.dedup_scope)
}

/// Belt patrols, up to the per-system cap, skipping belts already patrolled.
pub fn decorate_belts<R: Region + ?Sized>(region: &mut R, config: &DecorConfig) -> DecorationReport {
    let categories = belt_categories(config);
    if categories.is_empty() || excluded_class(&*region, config) {
        return DecorationReport::skipped();
    }

    if config.only_high_sec && region.security() < config.min_sec_for_belts {
        info!(
            "System {} security {:.1} is below {:.1}; no belt patrols.",
            region.id(),
            region.security(),
            config.min_sec_for_belts
        );
        return DecorationReport::skipped();
    }

    let belts = find_anchors(&*region, AnchorKind::Belt);
    if belts.is_empty() {
        info!("System {} has no asteroid belts; no belt patrols.", region.id());
        return DecorationReport::skipped();
    }

    let snapshot = EntitySnapshot::capture(&*region);
    decorate_anchors(region, &belts, &categories, &snapshot, config.dedup_scope)
}

/// Apply a fixed environment template around every gate in the gate index.
///
/// Only `skip_wormholes` and `dedup_scope` are read from `config`.
pub fn spawn_gate_environment<R: Region + ?Sized>(
    region: &mut R,
    template: &EnvironmentTemplate,
    config: &DecorConfig,
) -> DecorationReport {
    if !template.is_enabled() {
        warn!("Gate environment template has no type ids configured; nothing will be spawned.");
        return DecorationReport::skipped();
    }
    if excluded_class(&*region, config) {
        return DecorationReport::skipped();
    }

    let gates = indexed_gates(&*region);
    if gates.is_empty() {
        info!("System {} has no stargates; nothing to do.", region.id());
        return DecorationReport::skipped();
    }

    info!(
        "System {} has {} gates; spawning {} environment props per gate.",
        region.id(),
        gates.len(),
        template.props_per_gate()
    );

    let snapshot = EntitySnapshot::capture(&*region);
    decorate_anchors(
        region,
        &gates,
        &template.prop_categories(),
        &snapshot,
        config.dedup_scope,
    )
}

fn excluded_class<R: Region + ?Sized>(region: &R, config: &DecorConfig) -> bool {
    let class = region.class();
    let excluded = config.skip_wormholes && class == RegionClass::Wormhole;
    if excluded {
        debug!("System {} is {} space; skipped.", region.id(), class.name());
    }
    excluded
}

/// Shared anchor walk behind every pass.
///
/// Caps count spawn attempts, so a failed creation still uses up its slot.
/// When every category is capped and all caps are used up the walk stops.
fn decorate_anchors<R: Region + ?Sized>(
    region: &mut R,
    anchors: &[Anchor],
    categories: &[PropCategory],
    snapshot: &EntitySnapshot,
    scope: DedupScope,
) -> DecorationReport {
    let mut report = DecorationReport {
        attempted: true,
        ..DecorationReport::skipped()
    };
    let mut index = DedupIndex::new(snapshot, scope);
    let mut placed = vec![0usize; categories.len()];
    let all_capped = categories.iter().all(|c| c.cap.is_some());

    for anchor in anchors {
        if all_capped
            && categories
                .iter()
                .zip(&placed)
                .all(|(category, n)| remaining(category, *n) == 0)
        {
            report.cap_reached = true;
            break;
        }
        report.anchors += 1;

        for (slot, category) in categories.iter().enumerate() {
            if !category.is_enabled() {
                continue;
            }
            let budget = remaining(category, placed[slot]);
            if budget == 0 {
                report.cap_reached = true;
                continue;
            }

            if let Some((point, radius)) = category.anchor_dedup(anchor) {
                if index.is_duplicate(category.type_id, point, radius) {
                    debug!(
                        "{} already near {} '{}'; skipped.",
                        category.label, anchor.id, anchor.name
                    );
                    report.duplicates_skipped += 1;
                    continue;
                }
            }

            if budget < category.placement.count() {
                report.cap_reached = true;
            }

            let name = category.prop_name(anchor);
            for target in category.placement.positions(anchor, budget) {
                if let Some((point, radius)) = category.target_dedup(target) {
                    if index.is_duplicate(category.type_id, point, radius) {
                        report.duplicates_skipped += 1;
                        continue;
                    }
                }

                placed[slot] += 1;
                match spawn_static(region, category.type_id, category.owner, target, &name) {
                    Some(_) => {
                        report.spawned += 1;
                        index.record(category.type_id, target);
                    }
                    None => report.failed += 1,
                }
            }
        }
    }

    report
}

fn remaining(category: &PropCategory, placed: usize) -> usize {
    category
        .cap
        .map_or(usize::MAX, |cap| cap.saturating_sub(placed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{BILLBOARD_TYPE, CONCORD_POLICE_TYPE, SENTRY_GUN_TYPE};
    use bevy::math::DVec3;
    use dg_core::{ItemTypeId, RegionId};
    use dg_world::SolarSystem;

    const GATE_A: u32 = 50001248;
    const GATE_B: u32 = 50001249;

    fn markers_only() -> DecorConfig {
        DecorConfig {
            enable_patrols: false,
            ..Default::default()
        }
    }

    fn two_gates() -> SolarSystem {
        let mut system = SolarSystem::new(RegionId(30000142), "Jita", 0.9);
        system.add_gate(GATE_A, "Stargate (Perimeter)", DVec3::ZERO);
        system.add_gate(GATE_B, "Stargate (Maurasi)", DVec3::new(100_000.0, 0.0, 0.0));
        system
    }

    fn belts(count: u32, spacing: f64) -> SolarSystem {
        let mut system = SolarSystem::new(RegionId(30002537), "Amamake", 0.4);
        for i in 0..count {
            system.add_belt(
                40160001 + i,
                &format!("Amamake III - Asteroid Belt {}", i + 1),
                DVec3::new(spacing * i as f64, 0.0, 0.0),
            );
        }
        system
    }

    fn positions_of(system: &SolarSystem, type_id: ItemTypeId) -> Vec<DVec3> {
        system
            .entities_of_type(type_id)
            .iter()
            .map(|e| e.position)
            .collect()
    }

    #[test]
    fn existing_marker_suppresses_only_its_gate() {
        let mut system = two_gates();
        system.add_static(40009990, BILLBOARD_TYPE, DVec3::new(20_000.0, 0.0, 0.0));

        let report = decorate_gates(&mut system, &markers_only());

        assert_eq!(report.spawned, 1);
        assert_eq!(report.duplicates_skipped, 1);
        let markers = system.entities_of_type(BILLBOARD_TYPE);
        assert_eq!(markers.len(), 2);

        let new_marker = markers.iter().find(|e| e.id.0 != 40009990).unwrap();
        let distance = new_marker.position.distance(DVec3::new(100_000.0, 0.0, 0.0));
        assert!((15_000.0..30_000.0).contains(&distance), "distance {distance}");
        assert_eq!(new_marker.name.as_deref(), Some("Billboard @ Stargate (Maurasi)"));
    }

    #[test]
    fn one_marker_per_undecorated_gate() {
        let mut system = two_gates();
        let report = decorate_gates(&mut system, &markers_only());

        assert!(report.attempted);
        assert_eq!(report.anchors, 2);
        assert_eq!(report.spawned, 2);
        assert_eq!(system.entities_of_type(BILLBOARD_TYPE).len(), 2);
        assert_eq!(system.broadcasts().len(), 2);
    }

    #[test]
    fn second_pass_adds_no_markers() {
        let mut system = two_gates();
        decorate_gates(&mut system, &DecorConfig::default());
        let second = decorate_gates(&mut system, &DecorConfig::default());

        assert_eq!(system.entities_of_type(BILLBOARD_TYPE).len(), 2);
        assert_eq!(second.duplicates_skipped, 2);
        // Patrols have no identity to dedup against and are placed again.
        assert_eq!(second.spawned, 2);
        assert_eq!(system.entities_of_type(CONCORD_POLICE_TYPE).len(), 4);
    }

    #[test]
    fn placement_is_reproducible_across_systems() {
        let mut first = two_gates();
        let mut second = two_gates();
        decorate_gates(&mut first, &DecorConfig::default());
        decorate_gates(&mut second, &DecorConfig::default());

        assert_eq!(positions_of(&first, BILLBOARD_TYPE), positions_of(&second, BILLBOARD_TYPE));
        assert_eq!(
            positions_of(&first, CONCORD_POLICE_TYPE),
            positions_of(&second, CONCORD_POLICE_TYPE)
        );
    }

    #[test]
    fn dedup_radius_boundary_is_strict() {
        let config = markers_only();
        let radius = config.marker_dedup_radius;

        let mut at_radius = two_gates();
        at_radius.add_static(40009990, BILLBOARD_TYPE, DVec3::new(0.0, radius, 0.0));
        assert_eq!(decorate_gates(&mut at_radius, &config).spawned, 2);

        let mut inside = two_gates();
        inside.add_static(40009990, BILLBOARD_TYPE, DVec3::new(0.0, radius - 1e-3, 0.0));
        let report = decorate_gates(&mut inside, &config);
        assert_eq!(report.spawned, 1);
        assert_eq!(report.duplicates_skipped, 1);
    }

    #[test]
    fn other_types_do_not_suppress_markers() {
        let mut system = two_gates();
        system.add_static(40009990, SENTRY_GUN_TYPE, DVec3::new(1_000.0, 0.0, 0.0));
        assert_eq!(decorate_gates(&mut system, &markers_only()).spawned, 2);
    }

    #[test]
    fn disabled_marker_makes_no_requests_and_leaves_patrols_alone() {
        let mut with_markers = two_gates();
        decorate_gates(&mut with_markers, &DecorConfig::default());

        let config = DecorConfig {
            marker_type: ItemTypeId(0),
            ..Default::default()
        };
        let mut without = two_gates();
        let report = decorate_gates(&mut without, &config);

        assert_eq!(report.spawned, 2);
        assert_eq!(without.factory().requests(), 2);
        assert!(without.entities_of_type(BILLBOARD_TYPE).is_empty());
        assert_eq!(
            positions_of(&without, CONCORD_POLICE_TYPE),
            positions_of(&with_markers, CONCORD_POLICE_TYPE)
        );
    }

    #[test]
    fn gate_patrols_sit_at_spawn_offset() {
        let config = DecorConfig {
            marker_type: ItemTypeId(0),
            patrols_per_gate: 3,
            ..Default::default()
        };
        let mut system = two_gates();
        let report = decorate_gates(&mut system, &config);

        assert_eq!(report.spawned, 6);
        for patrol in system.entities_of_type(CONCORD_POLICE_TYPE) {
            let to_a = patrol.position.length();
            let to_b = patrol.position.distance(DVec3::new(100_000.0, 0.0, 0.0));
            let nearest = to_a.min(to_b);
            assert!((nearest - config.patrol_spawn_offset).abs() < 1e-6);
        }
    }

    #[test]
    fn everything_disabled_touches_nothing() {
        let config = DecorConfig {
            marker_type: ItemTypeId(0),
            enable_patrols: false,
            enable_belt_patrols: false,
            ..Default::default()
        };
        let mut system = two_gates();
        let report = activate_region(&mut system, &config, &EnvironmentTemplate::default());

        assert!(!report.attempted);
        assert_eq!(system.factory().requests(), 0);
        assert_eq!(system.entity_count(), 2);
    }

    #[test]
    fn creation_failures_are_counted_and_skipped() {
        let mut system = two_gates();
        system.factory_mut().reject_type(BILLBOARD_TYPE);

        let report = decorate_gates(&mut system, &DecorConfig::default());

        assert!(report.attempted);
        assert_eq!(report.failed, 2);
        assert_eq!(report.spawned, 2);
        assert!(!report.is_complete());
        assert_eq!(system.entities_of_type(CONCORD_POLICE_TYPE).len(), 2);
    }

    #[test]
    fn unusable_marker_offset_skips_markers_without_panicking() {
        let config: DecorConfig = ron::from_str("(marker_max_offset: NaN)").unwrap();
        let mut system = SolarSystem::new(RegionId(30000142), "Jita", 0.9);
        system.add_gate(GATE_A, "Stargate (Perimeter)", DVec3::ZERO);

        let report = decorate_gates(&mut system, &config);

        assert_eq!(report.spawned, 1);
        assert_eq!(system.factory().requests(), 1);
        assert!(system.entities_of_type(BILLBOARD_TYPE).is_empty());
        assert_eq!(system.entities_of_type(CONCORD_POLICE_TYPE).len(), 1);
    }

    #[test]
    fn belt_cap_is_per_system() {
        let config = DecorConfig {
            patrols_per_belt: 3,
            max_belt_patrols_per_system: 5,
            ..Default::default()
        };
        let mut system = belts(4, 1.0e9);

        let report = decorate_belts(&mut system, &config);

        assert_eq!(report.spawned, 5);
        assert!(report.cap_reached);
        assert_eq!(report.anchors, 2);
        assert_eq!(system.entities_of_type(CONCORD_POLICE_TYPE).len(), 5);
    }

    #[test]
    fn belt_patrols_share_a_start_point() {
        let config = DecorConfig {
            patrols_per_belt: 2,
            ..Default::default()
        };
        let mut system = belts(1, 0.0);
        decorate_belts(&mut system, &config);

        let patrols = positions_of(&system, CONCORD_POLICE_TYPE);
        assert_eq!(patrols.len(), 2);
        assert_eq!(patrols[0], patrols[1]);
        assert!((patrols[0].length() - config.belt_spawn_offset).abs() < 1e-6);
        assert_eq!(
            system.entities_of_type(CONCORD_POLICE_TYPE)[0].name.as_deref(),
            Some("CONCORD Belt Patrol @ Amamake III - Asteroid Belt 1")
        );
    }

    #[test]
    fn patrolled_belt_is_skipped() {
        let mut system = belts(2, 1.0e9);
        system.add_static(40999999, CONCORD_POLICE_TYPE, DVec3::new(10_000.0, 0.0, 0.0));

        let report = decorate_belts(&mut system, &DecorConfig::default());

        assert_eq!(report.duplicates_skipped, 1);
        assert_eq!(report.spawned, 1);
        assert!(!report.cap_reached);
    }

    #[test]
    fn cumulative_scope_sees_earlier_spawns() {
        let mut pass_start = belts(2, 10_000.0);
        let report = decorate_belts(&mut pass_start, &DecorConfig::default());
        assert_eq!(report.spawned, 2);

        let config = DecorConfig {
            dedup_scope: DedupScope::Cumulative,
            ..Default::default()
        };
        let mut cumulative = belts(2, 10_000.0);
        let report = decorate_belts(&mut cumulative, &config);
        assert_eq!(report.spawned, 1);
        assert_eq!(report.duplicates_skipped, 1);
    }

    #[test]
    fn security_filter_blocks_low_sec_belts() {
        let config = DecorConfig {
            only_high_sec: true,
            ..Default::default()
        };
        let mut low_sec = belts(2, 1.0e9);
        assert!(!decorate_belts(&mut low_sec, &config).attempted);
        assert_eq!(low_sec.factory().requests(), 0);

        let mut high_sec = SolarSystem::new(RegionId(30000142), "Jita", 0.5);
        high_sec.add_belt(40009081, "Jita IV - Asteroid Belt 1", DVec3::ZERO);
        assert_eq!(decorate_belts(&mut high_sec, &config).spawned, 1);
    }

    #[test]
    fn wormholes_are_skipped_unless_allowed() {
        let mut wormhole = SolarSystem::new(RegionId(31000005), "J100820", -1.0);
        wormhole.add_belt(40300001, "J100820 I - Asteroid Belt 1", DVec3::ZERO);

        let report = activate_region(&mut wormhole, &DecorConfig::default(), &EnvironmentTemplate::default());
        assert!(!report.attempted);
        assert_eq!(wormhole.entity_count(), 1);

        let config = DecorConfig {
            skip_wormholes: false,
            ..Default::default()
        };
        assert_eq!(decorate_belts(&mut wormhole, &config).spawned, 1);
    }

    #[test]
    fn no_anchors_is_a_quiet_no_op() {
        let mut empty = SolarSystem::new(RegionId(30000001), "Tanoo", 0.8);
        let report = activate_region(&mut empty, &DecorConfig::default(), &EnvironmentTemplate::default());
        assert_eq!(report, DecorationReport::skipped());
    }

    #[test]
    fn template_places_full_layout_around_each_gate() {
        let mut system = two_gates();
        let template = EnvironmentTemplate::default_gate();

        let report = spawn_gate_environment(&mut system, &template, &DecorConfig::default());

        assert_eq!(report.spawned, 18);
        assert_eq!(system.entities_of_type(BILLBOARD_TYPE).len(), 2);
        assert_eq!(system.entities_of_type(SENTRY_GUN_TYPE).len(), 16);
        assert!(positions_of(&system, BILLBOARD_TYPE).contains(&DVec3::new(115_000.0, 0.0, 0.0)));
        assert!(positions_of(&system, SENTRY_GUN_TYPE).contains(&DVec3::new(0.0, -8_000.0, -10_000.0)));
    }

    #[test]
    fn template_pass_is_idempotent() {
        let mut system = two_gates();
        let template = EnvironmentTemplate::default_gate();
        spawn_gate_environment(&mut system, &template, &DecorConfig::default());

        let again = spawn_gate_environment(&mut system, &template, &DecorConfig::default());
        assert_eq!(again.spawned, 0);
        assert_eq!(again.duplicates_skipped, 18);
        assert_eq!(system.entity_count(), 20);
    }

    #[test]
    fn template_without_gates_is_a_no_op() {
        let mut system = belts(1, 0.0);
        let template = EnvironmentTemplate::default_gate();

        let report = spawn_gate_environment(&mut system, &template, &DecorConfig::default());

        assert_eq!(report, DecorationReport::skipped());
        assert_eq!(system.factory().requests(), 0);
        assert_eq!(system.entity_count(), 1);
    }

    #[test]
    fn template_failures_do_not_stop_other_props() {
        let mut system = two_gates();
        system.factory_mut().reject_type(SENTRY_GUN_TYPE);
        let template = EnvironmentTemplate::default_gate();

        let report = spawn_gate_environment(&mut system, &template, &DecorConfig::default());

        assert!(report.attempted);
        assert_eq!(report.anchors, 2);
        assert_eq!(report.spawned, 2);
        assert_eq!(report.failed, 16);
        assert_eq!(system.factory().requests(), 18);
        assert_eq!(system.entities_of_type(BILLBOARD_TYPE).len(), 2);
        assert!(system.entities_of_type(SENTRY_GUN_TYPE).is_empty());
    }

    #[test]
    fn disabled_template_is_a_no_op() {
        let mut template = EnvironmentTemplate::default_gate();
        for category in &mut template.categories {
            category.type_id = ItemTypeId(0);
        }
        let mut system = two_gates();

        let report = spawn_gate_environment(&mut system, &template, &DecorConfig::default());
        assert!(!report.attempted);
        assert_eq!(system.factory().requests(), 0);
    }

    #[test]
    fn template_layout_runs_with_belts() {
        let config = DecorConfig {
            gate_layout: GateLayout::Template,
            ..Default::default()
        };
        let mut system = two_gates();
        system.add_belt(40009081, "Jita IV - Asteroid Belt 1", DVec3::new(1.0e9, 0.0, 0.0));

        let report = activate_region(&mut system, &config, &EnvironmentTemplate::default_gate());

        assert_eq!(report.anchors, 3);
        assert_eq!(report.spawned, 19);
        assert_eq!(system.entities_of_type(CONCORD_POLICE_TYPE).len(), 1);
    }
}
