//! Integration tests for the component kind enumeration and kind sets.

use corral_foundation::{ComponentKind, KindSet};

#[test]
fn kind_count_tracks_the_enumeration() {
    assert_eq!(ComponentKind::COUNT, ComponentKind::ALL.len());
    // A full set saturates at exactly the enumeration size.
    let full = KindSet::from_iter(ComponentKind::ALL);
    assert_eq!(full.len(), ComponentKind::COUNT);
}

#[test]
fn set_operations_derive_attachment_masks() {
    let attached = KindSet::from_iter([ComponentKind::Position, ComponentKind::Movable]);
    let requested = KindSet::from_iter([
        ComponentKind::Movable,
        ComponentKind::Visible,
        ComponentKind::Tangible,
    ]);

    // Requested kinds not yet attached.
    let to_attach = (requested ^ attached) & requested;
    assert_eq!(
        to_attach,
        KindSet::from_iter([ComponentKind::Visible, ComponentKind::Tangible])
    );

    // Attached kinds that are also requested.
    let to_detach = attached & requested;
    assert_eq!(to_detach, KindSet::of(ComponentKind::Movable));
}

#[test]
fn iteration_order_is_ascending_regardless_of_insertion() {
    let set = KindSet::from_iter([
        ComponentKind::Tangible,
        ComponentKind::Movable,
        ComponentKind::Position,
    ]);

    let kinds: Vec<_> = set.iter().collect();
    assert_eq!(
        kinds,
        vec![
            ComponentKind::Position,
            ComponentKind::Movable,
            ComponentKind::Tangible,
        ]
    );
}

#[test]
fn toggle_round_trips() {
    let mut set = KindSet::new();
    for kind in ComponentKind::ALL {
        set.toggle(kind);
    }
    assert_eq!(set.len(), ComponentKind::COUNT);

    for kind in ComponentKind::ALL {
        set.toggle(kind);
    }
    assert!(set.is_empty());
}
