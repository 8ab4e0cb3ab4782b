use error_stack::Result;
use std::ops::Index;

use super::resolution_type::{ResolutionType, UnknownResolutionTier};
use super::Resolution;

/// The total mapping from [`ResolutionType`] to [`Resolution`]. Holds no data; every entry is a constant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResolutionMap;

pub const RESOLUTION_MAP: ResolutionMap = ResolutionMap;

impl ResolutionMap {
    pub const fn get(&self, tier: ResolutionType) -> Resolution {
        tier.resolution()
    }
    pub const fn len(&self) -> usize {
        ResolutionType::ALL.len()
    }
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }
    pub fn iter(&self) -> impl Iterator<Item = (ResolutionType, Resolution)> {
        ResolutionType::ALL
            .into_iter()
            .map(|tier| (tier, tier.resolution()))
    }
    pub fn tier_of(&self, resolution: Resolution) -> Option<ResolutionType> {
        //! Reverse lookup. Dimensions that are not a registry entry have no tier.
        self.iter()
            .find(|(_, entry)| *entry == resolution)
            .map(|(tier, _)| tier)
    }
}

impl Index<ResolutionType> for ResolutionMap {
    type Output = Resolution;

    fn index(&self, tier: ResolutionType) -> &Resolution {
        tier.resolution_ref()
    }
}

/// Looks up a tier by its string tag (`"HD"`, `"FHD"`, `"QHD"` or `"UHD"`).
pub fn lookup_tag(tag: &str) -> Result<Resolution, UnknownResolutionTier> {
    let tier: ResolutionType = tag.parse()?;
    tracing::trace!(%tier, "resolved resolution tag");
    Ok(RESOLUTION_MAP.get(tier))
}
