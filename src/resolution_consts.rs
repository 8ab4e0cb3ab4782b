use super::Resolution;

pub const RESOLUTION_HD: Resolution = Resolution::new(1280, 720);
pub const RESOLUTION_FHD: Resolution = Resolution::new(1920, 1080);
pub const RESOLUTION_QHD: Resolution = Resolution::new(2560, 1440);
pub const RESOLUTION_UHD: Resolution = Resolution::new(3840, 2160);
