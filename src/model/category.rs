use serde::{Deserialize, Serialize};
use std::fmt;

/// Closed set of configuration categories.
///
/// Declaration order is display order and unlock order, so the derived `Ord`
/// is meaningful.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CategoryId {
    Chassis,
    Model,
    WallColor,
    Cabinet,
    Counter,
    Electrical,
    Heating,
    Exterior,
    Bathroom,
    Lighting,
    Power,
}

impl CategoryId {
    pub const ALL: [CategoryId; 11] = [
        CategoryId::Chassis,
        CategoryId::Model,
        CategoryId::WallColor,
        CategoryId::Cabinet,
        CategoryId::Counter,
        CategoryId::Electrical,
        CategoryId::Heating,
        CategoryId::Exterior,
        CategoryId::Bathroom,
        CategoryId::Lighting,
        CategoryId::Power,
    ];

    /// The exclusive slot this category is held in, if any.
    #[must_use]
    pub fn slot(self) -> Option<SlotKind> {
        match self {
            CategoryId::WallColor => Some(SlotKind::WallColor),
            CategoryId::Cabinet => Some(SlotKind::Cabinet),
            CategoryId::Counter => Some(SlotKind::Counter),
            _ => None,
        }
    }

    /// Categories whose options live in the toggle set.
    #[must_use]
    pub fn is_toggle(self) -> bool {
        matches!(
            self,
            CategoryId::Electrical
                | CategoryId::Heating
                | CategoryId::Exterior
                | CategoryId::Bathroom
                | CategoryId::Lighting
                | CategoryId::Power
        )
    }

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            CategoryId::Chassis => "Vehicle Chassis",
            CategoryId::Model => "Layout Models",
            CategoryId::WallColor => "Wall Finish",
            CategoryId::Cabinet => "Cabinet Options",
            CategoryId::Counter => "Kitchen",
            CategoryId::Electrical => "Electrical & Connectivity",
            CategoryId::Heating => "Heating & Cooling",
            CategoryId::Exterior => "Exterior Features",
            CategoryId::Bathroom => "Bathroom Options",
            CategoryId::Lighting => "Lighting Systems",
            CategoryId::Power => "Power Systems",
        }
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Configuration dimensions that hold at most one pick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SlotKind {
    WallColor,
    Cabinet,
    Counter,
}

impl SlotKind {
    pub const ALL: [SlotKind; 3] = [SlotKind::WallColor, SlotKind::Cabinet, SlotKind::Counter];

    #[must_use]
    pub fn category(self) -> CategoryId {
        match self {
            SlotKind::WallColor => CategoryId::WallColor,
            SlotKind::Cabinet => CategoryId::Cabinet,
            SlotKind::Counter => CategoryId::Counter,
        }
    }
}
