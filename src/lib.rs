pub use error_stack::{Context, Report, Result, ResultExt};
pub use error_stack_derive::ErrorStack;

pub mod registry;
pub mod resolution;
pub mod resolution_consts;
pub mod resolution_type;

pub use registry::{lookup_tag, ResolutionMap, RESOLUTION_MAP};
pub use resolution::Resolution;
pub use resolution_consts::*;
pub use resolution_type::{lookup, ResolutionType, UnknownResolutionTier};

pub mod prelude {
    pub use super::registry::*;
    pub use super::resolution::Resolution;
    pub use super::resolution_consts::*;
    pub use super::resolution_type::*;
}
