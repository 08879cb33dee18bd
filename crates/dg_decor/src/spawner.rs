use bevy::log::{debug, warn};
use bevy::math::DVec3;
use dg_core::{ItemId, ItemTypeId, OwnerId};
use dg_world::{ItemData, Region};

/// Create one static prop and hand it to the system.
///
/// The item is created through the system's item factory, wrapped as a
/// static entity, put on grid, registered without an anomaly signal and
/// announced to observers. The returned id is only good for logging; the
/// system owns the entity.
///
/// Returns `None` if `type_id` is not a real type or the factory refuses the
/// item. Neither is an error: the caller moves on to the next prop.
pub fn spawn_static<R: Region + ?Sized>(
    region: &mut R,
    type_id: ItemTypeId,
    owner: OwnerId,
    position: DVec3,
    name: &str,
) -> Option<ItemId> {
    if !type_id.is_valid() {
        return None;
    }

    let data = ItemData::in_space(type_id, owner, region.id(), name, position);
    let Some(item) = region.spawn_item(data) else {
        warn!(
            "Failed to create item type {} at ({:.0}, {:.0}, {:.0}) in system {} ({}).",
            type_id,
            position.x,
            position.y,
            position.z,
            region.id(),
            region.name()
        );
        return None;
    };

    let entity = region.wrap_static(&item);
    region.add_to_grid(&entity);
    region.add_entity(entity, false);
    region.send_static(item.id);

    debug!(
        "Spawned item {} type {} '{}' at ({:.0}, {:.0}, {:.0}) in system {}.",
        item.id,
        type_id,
        name,
        position.x,
        position.y,
        position.z,
        region.id()
    );

    Some(item.id)
}
