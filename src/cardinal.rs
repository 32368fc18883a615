//! Cardinal direction mapping over eight 45° compass sectors

/// One of the eight compass points
///
/// Each variant covers a half-open 45° sector `[k·45°, (k+1)·45°)` with
/// boundaries at 0°, 45°, 90°, ..., 315°. The table wraps: degree 0 and the
/// unreachable degree 360 both map to [`Cardinal::North`].
///
/// # Example
/// ```
/// use compass_heading::Cardinal;
///
/// assert_eq!(Cardinal::from_degrees(0), Cardinal::North);
/// assert_eq!(Cardinal::from_degrees(45), Cardinal::NorthEast);
/// assert_eq!(Cardinal::from_degrees(359), Cardinal::NorthWest);
/// assert_eq!(Cardinal::from_degrees(150).as_str(), "SE");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cardinal {
    /// [0°, 45°), and the wrap sector
    North,
    /// [45°, 90°)
    NorthEast,
    /// [90°, 135°)
    East,
    /// [135°, 180°)
    SouthEast,
    /// [180°, 225°)
    South,
    /// [225°, 270°)
    SouthWest,
    /// [270°, 315°)
    West,
    /// [315°, 360°)
    NorthWest,
}

impl Cardinal {
    /// Map a bearing in degrees onto its 45° sector
    ///
    /// Values at or above 360 wrap around first, so any `u16` is accepted.
    pub fn from_degrees(degrees: u16) -> Cardinal {
        match (degrees % 360) / 45 {
            1 => Cardinal::NorthEast,
            2 => Cardinal::East,
            3 => Cardinal::SouthEast,
            4 => Cardinal::South,
            5 => Cardinal::SouthWest,
            6 => Cardinal::West,
            7 => Cardinal::NorthWest,
            _ => Cardinal::North,
        }
    }

    /// Compass abbreviation for display
    pub fn as_str(&self) -> &'static str {
        match self {
            Cardinal::North => "N",
            Cardinal::NorthEast => "NE",
            Cardinal::East => "E",
            Cardinal::SouthEast => "SE",
            Cardinal::South => "S",
            Cardinal::SouthWest => "SW",
            Cardinal::West => "W",
            Cardinal::NorthWest => "NW",
        }
    }
}

impl core::fmt::Display for Cardinal {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}
