//! Responsive item metrics for the trending row

/// Horizontal gap between carousel items, in pixels.
pub const ITEM_GAP: f32 = 16.0;

/// Viewport width classes used to pick an item width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Breakpoint {
    /// `<= 480px`
    Phone,
    /// `<= 768px`
    Tablet,
    /// `<= 1024px`
    Laptop,
    Desktop,
}

impl Breakpoint {
    pub fn classify(viewport_width: f32) -> Self {
        if viewport_width <= 480.0 {
            Breakpoint::Phone
        } else if viewport_width <= 768.0 {
            Breakpoint::Tablet
        } else if viewport_width <= 1024.0 {
            Breakpoint::Laptop
        } else {
            Breakpoint::Desktop
        }
    }

    /// Card width without the gap.
    pub const fn item_width(self) -> f32 {
        match self {
            Breakpoint::Phone => 120.0,
            Breakpoint::Tablet => 150.0,
            Breakpoint::Laptop => 180.0,
            Breakpoint::Desktop => 200.0,
        }
    }

    /// Card width plus the trailing gap; one index step in pixels.
    pub const fn stride(self) -> f32 {
        self.item_width() + ITEM_GAP
    }
}

/// Pixel distance between the starts of two adjacent items at this width.
#[inline]
pub fn item_stride(viewport_width: f32) -> f32 {
    Breakpoint::classify(viewport_width).stride()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakpoints_are_inclusive_upper_bounds() {
        assert_eq!(Breakpoint::classify(480.0), Breakpoint::Phone);
        assert_eq!(Breakpoint::classify(481.0), Breakpoint::Tablet);
        assert_eq!(Breakpoint::classify(768.0), Breakpoint::Tablet);
        assert_eq!(Breakpoint::classify(1024.0), Breakpoint::Laptop);
        assert_eq!(Breakpoint::classify(1025.0), Breakpoint::Desktop);
    }

    #[test]
    fn stride_includes_gap() {
        assert_eq!(item_stride(320.0), 136.0);
        assert_eq!(item_stride(700.0), 166.0);
        assert_eq!(item_stride(1000.0), 196.0);
        assert_eq!(item_stride(1920.0), 216.0);
    }
}
