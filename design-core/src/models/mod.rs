mod add_on;
mod area;
mod design_package;
mod estimate;
mod rate_card;
mod space_type;

pub use add_on::AddOn;
pub use area::AreaRange;
pub use design_package::{DesignPackage, PackagePricing};
pub use estimate::{AddOnLine, EstimateBreakdown, EstimateInput, EstimateResult};
pub use rate_card::{RateCard, RateCardError};
pub use space_type::SpaceType;
