//! Acceleration sample type.

/// One X/Y/Z acceleration reading in raw device units.
///
/// Values come from either the packed 16-bit layout or the 8-bit high-byte layout; in both
/// cases one unit equals `1 / gain` g, see [`Lis2dh::gain`](crate::Lis2dh::gain).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Sample([i16; 3]);

impl Sample {
    /// Creates a sample from its three axes.
    pub const fn new(x: i16, y: i16, z: i16) -> Self {
        Self([x, y, z])
    }

    /// X-axis reading.
    pub const fn x(&self) -> i16 {
        self.0[0]
    }

    /// Y-axis reading.
    pub const fn y(&self) -> i16 {
        self.0[1]
    }

    /// Z-axis reading.
    pub const fn z(&self) -> i16 {
        self.0[2]
    }

    /// The three axes in X, Y, Z order.
    pub const fn as_array(&self) -> &[i16; 3] {
        &self.0
    }
}

impl From<[i16; 3]> for Sample {
    fn from(axes: [i16; 3]) -> Self {
        Self(axes)
    }
}

impl From<Sample> for [i16; 3] {
    fn from(sample: Sample) -> Self {
        sample.0
    }
}
