//! Header resolution.
//!
//! Turns a component's identification block into a [`Header`]: display
//! labels, structured dates, identifiers and the inventory number that the
//! component contributes to its descendants' parent chains.
//!
//! Resolution cannot fail; every input is an in-memory value.

use crate::models::{Did, Fidelity, Header, NodeDate, NodeIdentifier, UnitId};

/// Identifier types that designate an inventory number. The empty type
/// counts as well.
pub const INVENTORY_ID_TYPES: [&str; 3] = ["", "ABS", "series_code"];

/// Build the header for one identification block.
pub fn resolve_header(did: &Did, fidelity: Fidelity) -> Header {
    let sparse = fidelity.is_sparse();
    let mut header = Header::default();

    if !sparse {
        if let Some(physdesc) = &did.physdesc {
            header.physical_description = physdesc.clone();
        }
    }

    // A dated title is represented by its dates only, never its own text.
    for title in &did.unit_titles {
        if title.dates.is_empty() {
            header.labels.push(title.text.clone());
            continue;
        }
        for date in &title.dates {
            if sparse {
                header.labels.push(date.label.clone());
            } else {
                header.dates.push(NodeDate::from(date));
                header.date_as_label = true;
            }
        }
    }

    if !sparse {
        header.dates.extend(did.unit_dates.iter().map(NodeDate::from));
    }

    let (identifiers, inventory_number) = resolve_identifiers(&did.unit_ids, fidelity);
    header.identifiers = identifiers;
    header.inventory_number = inventory_number;

    header
}

/// Project identifiers and pick the inventory number.
///
/// The last identifier with an inventory type wins. Sparse fidelity
/// returns no identifiers but still selects the inventory number.
pub fn resolve_identifiers(unit_ids: &[UnitId], fidelity: Fidelity) -> (Vec<NodeIdentifier>, String) {
    let mut identifiers = Vec::new();
    let mut inventory_number = String::new();

    for unit_id in unit_ids {
        if is_inventory_type(&unit_id.kind) {
            inventory_number = unit_id.id.clone();
        }
        if !fidelity.is_sparse() {
            identifiers.push(NodeIdentifier::from(unit_id));
        }
    }

    (identifiers, inventory_number)
}

pub fn is_inventory_type(kind: &str) -> bool {
    INVENTORY_ID_TYPES.contains(&kind)
}
