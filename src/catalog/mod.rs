mod capacity;
mod profile;
mod resolve;

pub use capacity::{Capacity, StorageUnit, TB_TO_GB};
pub use profile::{
    Capabilities, ModelFamily, SimConfig, SpecificationProfile, DEFAULT_PROFILE, IPHONE_13,
    IPHONE_14, IPHONE_15, IPHONE_16,
};
pub use resolve::{match_family, resolve};
