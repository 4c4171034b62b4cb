//! Catalog store holding the per-session reference data

pub mod types;

pub use types::*;

use serde::{Deserialize, Serialize};

/// Immutable snapshot of brigades, categories, items and sizes
///
/// The store is loaded once per session and never mutated by the core. A
/// reload replaces the whole snapshot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    /// Brigades, in the order the source returned them
    pub brigades: Vec<Brigade>,

    /// Categories
    pub categories: Vec<Category>,

    /// Items
    pub items: Vec<Item>,

    /// Sizes
    pub sizes: Vec<Size>,
}

impl Catalog {
    /// Create a catalog from the four reference collections
    pub fn new(
        brigades: Vec<Brigade>,
        categories: Vec<Category>,
        items: Vec<Item>,
        sizes: Vec<Size>,
    ) -> Self {
        Self {
            brigades,
            categories,
            items,
            sizes,
        }
    }

    /// Whether nothing has been loaded yet
    pub fn is_empty(&self) -> bool {
        self.brigades.is_empty()
            && self.categories.is_empty()
            && self.items.is_empty()
            && self.sizes.is_empty()
    }

    /// Look up a brigade by ID
    pub fn brigade(&self, id: BrigadeId) -> Option<&Brigade> {
        self.brigades.iter().find(|b| b.id == id)
    }

    /// Look up a category by ID
    pub fn category(&self, id: CategoryId) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    /// Look up an item by ID
    pub fn item(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|i| i.id == id)
    }

    /// Look up a size by ID
    pub fn size(&self, id: SizeId) -> Option<&Size> {
        self.sizes.iter().find(|s| s.id == id)
    }

    /// Seed data mirroring the reference back-end's mock responses
    pub fn sample() -> Self {
        let brigades = vec![
            Brigade {
                id: 1,
                name: "Brigada Central".to_string(),
                active_members: 25,
                commander_contact: "+34 600 123 456".to_string(),
                logistics_officer: "María García".to_string(),
                logistics_contact: "+34 600 789 012".to_string(),
                emergency_number: Some("112".to_string()),
            },
            Brigade {
                id: 2,
                name: "Brigada Norte".to_string(),
                active_members: 18,
                commander_contact: "+34 600 234 567".to_string(),
                logistics_officer: "Carlos López".to_string(),
                logistics_contact: "+34 600 890 123".to_string(),
                emergency_number: None,
            },
            Brigade {
                id: 3,
                name: "Brigada Sur".to_string(),
                active_members: 22,
                commander_contact: "+34 600 345 678".to_string(),
                logistics_officer: "Ana Martínez".to_string(),
                logistics_contact: "+34 600 901 234".to_string(),
                emergency_number: None,
            },
        ];

        let categories = [
            (1, "EPP Ropa"),
            (2, "EPP Equipamiento"),
            (3, "Herramientas"),
            (4, "Logística Vehículos"),
            (5, "Alimentación"),
            (6, "Medicamentos"),
        ]
        .into_iter()
        .map(|(id, name)| Category {
            id,
            name: name.to_string(),
        })
        .collect();

        let items = [
            (1, "Botas Forestales", 1, true, ValueKind::Quantity),
            (2, "Casco Protector", 2, false, ValueKind::Quantity),
            (3, "Guantes Resistentes", 1, true, ValueKind::Quantity),
            (4, "Gasolina", 4, false, ValueKind::Amount),
            (5, "Botiquín Básico", 6, false, ValueKind::Quantity),
        ]
        .into_iter()
        .map(|(id, name, category_id, requires_size, value_kind)| Item {
            id,
            name: name.to_string(),
            category_id,
            requires_size,
            value_kind,
            size_kind: None,
            category: None,
        })
        .collect();

        let sizes = [
            (1, SizeKind::Clothing, "S"),
            (2, SizeKind::Clothing, "M"),
            (3, SizeKind::Clothing, "L"),
            (4, SizeKind::Clothing, "XL"),
            (5, SizeKind::Boots, "40"),
            (6, SizeKind::Boots, "41"),
            (7, SizeKind::Boots, "42"),
            (8, SizeKind::Boots, "43"),
            (9, SizeKind::Gloves, "M"),
            (10, SizeKind::Gloves, "L"),
        ]
        .into_iter()
        .map(|(id, kind, value)| Size {
            id,
            kind,
            value: value.to_string(),
        })
        .collect();

        Self::new(brigades, categories, items, sizes)
    }
}
