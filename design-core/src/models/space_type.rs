use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A category of room or area with its base cost per unit area.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpaceType {
    pub id: String,
    pub name: String,
    pub base_rate: Decimal,
}

impl SpaceType {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        base_rate: Decimal,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            base_rate,
        }
    }
}
