use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// An optional supplementary service priced per unit area.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddOn {
    pub id: String,
    pub name: String,
    pub per_unit_rate: Decimal,
}

impl AddOn {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        per_unit_rate: Decimal,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            per_unit_rate,
        }
    }
}
