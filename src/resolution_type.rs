use error_stack::{Report, Result, ResultExt};
use error_stack_derive::ErrorStack;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use super::resolution_consts::*;
use super::Resolution;

/// Named resolution tiers. Closed set; every tier maps to exactly one [`Resolution`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ResolutionType {
    HD,
    FHD,
    QHD,
    UHD,
}

#[derive(ErrorStack, Debug, Clone, Copy, PartialEq, Eq)]
#[error_message("Unknown resolution tier")]
pub struct UnknownResolutionTier;

impl ResolutionType {
    /// Every tier, smallest first.
    pub const ALL: [ResolutionType; 4] = [
        ResolutionType::HD,
        ResolutionType::FHD,
        ResolutionType::QHD,
        ResolutionType::UHD,
    ];

    pub const fn resolution(self) -> Resolution {
        *self.resolution_ref()
    }

    /// The tier's constant itself; the only place tiers are matched to dimensions.
    pub const fn resolution_ref(self) -> &'static Resolution {
        match self {
            ResolutionType::HD => &RESOLUTION_HD,
            ResolutionType::FHD => &RESOLUTION_FHD,
            ResolutionType::QHD => &RESOLUTION_QHD,
            ResolutionType::UHD => &RESOLUTION_UHD,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            ResolutionType::HD => "HD",
            ResolutionType::FHD => "FHD",
            ResolutionType::QHD => "QHD",
            ResolutionType::UHD => "UHD",
        }
    }
}

/// Canonical dimensions of `tier`.
pub const fn lookup(tier: ResolutionType) -> Resolution {
    tier.resolution()
}

impl Display for ResolutionType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResolutionType {
    type Err = Report<UnknownResolutionTier>;

    fn from_str(tag: &str) -> Result<Self, UnknownResolutionTier> {
        //! Tags are matched exactly, so `"hd"` is rejected along with anything else not in [`ResolutionType::ALL`].
        match ResolutionType::ALL.into_iter().find(|tier| tier.as_str() == tag) {
            Some(tier) => Ok(tier),
            None => {
                tracing::debug!(tag, "rejected unknown resolution tier");
                Err(Report::new(UnknownResolutionTier))
                    .attach_printable_lazy(|| format!("{tag:?} is not a resolution tier"))
                    .attach_printable_lazy(|| {
                        let valid = ResolutionType::ALL.map(ResolutionType::as_str);
                        format!("Expected one of: {}", valid.join(", "))
                    })
            }
        }
    }
}

impl TryFrom<&str> for ResolutionType {
    type Error = Report<UnknownResolutionTier>;

    fn try_from(tag: &str) -> Result<Self, UnknownResolutionTier> {
        tag.parse()
    }
}
