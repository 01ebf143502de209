//! Full lifecycle scenarios: create, connect, disconnect, remove.

use corral_foundation::{ComponentKind, EntityId, KindSet};
use corral_storage::{EntityChangeDistributor, EntityController, SlabProvider};

#[derive(Default)]
struct RecordingDistributor {
    changes: Vec<EntityId>,
}

impl EntityChangeDistributor for RecordingDistributor {
    fn entity_changed(&mut self, id: EntityId) {
        self.changes.push(id);
    }
}

fn controller() -> EntityController<SlabProvider, RecordingDistributor> {
    EntityController::new(
        10,
        SlabProvider::new(10 * ComponentKind::COUNT),
        RecordingDistributor::default(),
    )
}

#[test]
fn worked_scenario_three_kinds_on_one_entity() {
    let mut sut = controller();
    let id = sut.create_entity();

    assert!(sut.connect_component(id, ComponentKind::Position));
    assert!(sut.connect_component(id, ComponentKind::Movable));
    assert!(sut.connect_component(id, ComponentKind::Visible));

    {
        let entity = sut.entity(id).unwrap();
        assert_eq!(entity.component_count(), 3);
        let chain: Vec<_> = sut
            .components()
            .components(entity)
            .map(|(_, node)| node.kind())
            .collect();
        assert_eq!(
            chain,
            vec![
                ComponentKind::Position,
                ComponentKind::Movable,
                ComponentKind::Visible,
            ]
        );
    }

    assert!(sut.disconnect_component(id, ComponentKind::Movable));

    let entity = sut.entity(id).unwrap();
    assert_eq!(entity.component_count(), 2);
    let chain: Vec<_> = sut
        .components()
        .components(entity)
        .map(|(_, node)| node.kind())
        .collect();
    assert_eq!(chain, vec![ComponentKind::Position, ComponentKind::Visible]);

    // The detached instance went back to the provider exactly once.
    assert_eq!(sut.components().provider().len(), 2);
}

#[test]
fn distributor_sees_one_notification_per_structural_change() {
    let mut sut = controller();
    let id = sut.create_entity_with(KindSet::of(ComponentKind::Position));

    sut.connect_component(id, ComponentKind::Movable);
    sut.connect_component(id, ComponentKind::Movable); // rejected, silent
    sut.disconnect_components(id, KindSet::from_iter(ComponentKind::ALL));
    sut.remove_entity(id); // bare by now, removal itself is silent

    assert_eq!(sut.distributor().changes, vec![id, id, id]);
}

#[test]
fn creating_a_full_population_and_tearing_it_down() {
    let mut sut = controller();
    let all = KindSet::from_iter(ComponentKind::ALL);

    let ids: Vec<_> = (0..10).map(|_| sut.create_entity_with(all)).collect();
    assert_eq!(sut.entity_count(), 10);
    assert_eq!(
        sut.components().provider().len(),
        10 * ComponentKind::COUNT
    );

    for id in &ids {
        assert!(sut.remove_entity(*id));
    }
    assert_eq!(sut.entity_count(), 0);
    assert!(sut.components().provider().is_empty());
}

#[test]
fn ids_recycle_through_the_full_facade() {
    let mut sut = controller();
    let first = sut.create_entity();
    let second = sut.create_entity();

    sut.remove_entity(first);
    let third = sut.create_entity();

    assert_eq!(third, first);
    assert!(sut.has_entity(second));
    assert!(sut.has_entity(third));
    assert_eq!(sut.entity_count(), 2);
}

#[test]
fn operations_on_departed_entities_are_rejected() {
    let mut sut = controller();
    let id = sut.create_entity_with(KindSet::of(ComponentKind::Visible));
    sut.remove_entity(id);

    assert!(!sut.has_entity(id));
    assert!(sut.entity(id).is_err());
    assert!(!sut.connect_component(id, ComponentKind::Position));
    assert!(!sut.disconnect_component(id, ComponentKind::Visible));
    assert!(!sut.remove_entity(id));
}

#[test]
fn survivors_keep_their_components_across_compaction() {
    let mut sut = controller();
    let all = KindSet::from_iter(ComponentKind::ALL);
    let ids: Vec<_> = (0..5).map(|_| sut.create_entity_with(all)).collect();

    // Removing the first entity swaps the last into its slot.
    sut.remove_entity(ids[0]);

    for &id in &ids[1..] {
        let entity = sut.entity(id).unwrap();
        assert_eq!(entity.attached, all);
        let chain: Vec<_> = sut
            .components()
            .components(entity)
            .map(|(_, node)| node.kind())
            .collect();
        assert_eq!(chain.len(), ComponentKind::COUNT);
    }
}
