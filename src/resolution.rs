use std::fmt::{Display, Formatter};

/// A pixel width/height pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Resolution {
    pub width: u32,
    pub height: u32,
}

impl Display for Resolution {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

impl Resolution {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
    pub const fn pixel_count(self) -> u64 {
        self.width as u64 * self.height as u64
    }
    pub fn aspect_ratio(self) -> (u32, u32) {
        //! Width and height reduced by their gcd, e.g. `(16, 9)` for 1920x1080.
        //! Returns the raw pair when either side is zero.
        if self.width == 0 || self.height == 0 {
            return (self.width, self.height);
        }
        let divisor = gcd(self.width, self.height);
        (self.width / divisor, self.height / divisor)
    }
}

impl From<Resolution> for (u32, u32) {
    fn from(resolution: Resolution) -> Self {
        (resolution.width, resolution.height)
    }
}

fn gcd(mut a: u32, mut b: u32) -> u32 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displays_as_width_by_height() {
        assert_eq!(Resolution::new(1920, 1080).to_string(), "1920x1080");
    }

    #[test]
    fn reduces_aspect_ratio() {
        assert_eq!(Resolution::new(1280, 720).aspect_ratio(), (16, 9));
        assert_eq!(Resolution::new(640, 480).aspect_ratio(), (4, 3));
        assert_eq!(Resolution::new(2560, 1080).aspect_ratio(), (64, 27));
        assert_eq!(Resolution::new(0, 0).aspect_ratio(), (0, 0));
        assert_eq!(Resolution::new(0, 5).aspect_ratio(), (0, 5));
        assert_eq!(Resolution::new(1920, 0).aspect_ratio(), (1920, 0));
    }

    #[test]
    fn pixel_count_does_not_overflow() {
        let huge = Resolution::new(u32::MAX, 2);
        assert_eq!(huge.pixel_count(), u32::MAX as u64 * 2);
        assert_eq!(Resolution::new(3840, 2160).pixel_count(), 8_294_400);
    }

    #[test]
    fn converts_into_tuple() {
        let (w, h): (u32, u32) = Resolution::new(2560, 1440).into();
        assert_eq!((w, h), (2560, 1440));
    }
}
