//! Reference data types served by the needs back-end

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a brigade
pub type BrigadeId = u32;

/// Identifier of a category
pub type CategoryId = u32;

/// Identifier of an item
pub type ItemId = u32;

/// Identifier of a size
pub type SizeId = u32;

/// A fire-brigade unit that can submit needs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Brigade {
    /// The brigade ID
    #[serde(rename = "id_brigada")]
    pub id: BrigadeId,

    /// Display name
    #[serde(rename = "nombre_brigada")]
    pub name: String,

    /// Number of active firefighters
    #[serde(rename = "bomberos_activos")]
    pub active_members: u32,

    /// Commander phone contact
    #[serde(rename = "contacto_comandante")]
    pub commander_contact: String,

    /// Name of the logistics officer
    #[serde(rename = "encargado_logistica")]
    pub logistics_officer: String,

    /// Logistics officer contact
    #[serde(rename = "contacto_logistica")]
    pub logistics_contact: String,

    /// Emergency number, if the brigade has one
    #[serde(
        rename = "numero_emergencia",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub emergency_number: Option<String>,
}

/// A grouping of items
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// The category ID
    #[serde(rename = "id_categoria")]
    pub id: CategoryId,

    /// Display name
    #[serde(rename = "nombre_categoria")]
    pub name: String,
}

/// How the numeric value of a need is interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ValueKind {
    /// A count of units
    #[serde(rename = "cantidad")]
    Quantity,

    /// A monetary amount
    #[serde(rename = "monto")]
    Amount,
}

impl ValueKind {
    /// Convert the kind to its wire representation
    pub fn as_str(&self) -> &'static str {
        match self {
            ValueKind::Quantity => "cantidad",
            ValueKind::Amount => "monto",
        }
    }
}

/// The family a size belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SizeKind {
    /// Garment sizes (S, M, L, ...)
    #[serde(rename = "ropa")]
    Clothing,

    /// Boot sizes (40, 41, ...)
    #[serde(rename = "botas")]
    Boots,

    /// Glove sizes
    #[serde(rename = "guantes")]
    Gloves,
}

impl SizeKind {
    /// Convert the kind to its wire representation
    pub fn as_str(&self) -> &'static str {
        match self {
            SizeKind::Clothing => "ropa",
            SizeKind::Boots => "botas",
            SizeKind::Gloves => "guantes",
        }
    }
}

impl fmt::Display for SizeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A supply type belonging to a category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// The item ID
    #[serde(rename = "id_item")]
    pub id: ItemId,

    /// Display name
    #[serde(rename = "nombre_item")]
    pub name: String,

    /// Category the item belongs to
    #[serde(rename = "id_categoria")]
    pub category_id: CategoryId,

    /// Whether a need for this item must carry a size
    #[serde(rename = "requiere_talla")]
    pub requires_size: bool,

    /// Whether the value is a quantity or an amount
    #[serde(rename = "tipo_valor")]
    pub value_kind: ValueKind,

    /// Explicit size family. When absent it is inferred from the name.
    #[serde(rename = "tipo_talla", default, skip_serializing_if = "Option::is_none")]
    pub size_kind: Option<SizeKind>,

    /// Embedded category as some endpoints return it
    #[serde(rename = "Categoria", default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
}

/// A size value scoped to a size family
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Size {
    /// The size ID
    #[serde(rename = "id_talla")]
    pub id: SizeId,

    /// Size family
    #[serde(rename = "tipo_talla")]
    pub kind: SizeKind,

    /// Display value ("M", "42", ...)
    #[serde(rename = "valor_talla")]
    pub value: String,
}

/// Fields of a brigade to be created; the back-end assigns the ID
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewBrigade {
    #[serde(rename = "nombre_brigada")]
    pub name: String,

    #[serde(rename = "bomberos_activos")]
    pub active_members: u32,

    #[serde(rename = "contacto_comandante")]
    pub commander_contact: String,

    #[serde(rename = "encargado_logistica")]
    pub logistics_officer: String,

    #[serde(rename = "contacto_logistica")]
    pub logistics_contact: String,

    #[serde(
        rename = "numero_emergencia",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub emergency_number: Option<String>,
}

/// Fields of a category to be created
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCategory {
    #[serde(rename = "nombre_categoria")]
    pub name: String,
}

/// Fields of an item to be created
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewItem {
    #[serde(rename = "nombre_item")]
    pub name: String,

    #[serde(rename = "id_categoria")]
    pub category_id: CategoryId,

    #[serde(rename = "requiere_talla")]
    pub requires_size: bool,

    #[serde(rename = "tipo_valor")]
    pub value_kind: ValueKind,

    #[serde(rename = "tipo_talla", default, skip_serializing_if = "Option::is_none")]
    pub size_kind: Option<SizeKind>,
}

/// Fields of a size to be created
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewSize {
    #[serde(rename = "tipo_talla")]
    pub kind: SizeKind,

    #[serde(rename = "valor_talla")]
    pub value: String,
}
