use std::f64::consts::PI;
use std::str::FromStr;

use crate::error::SelectorError;

/// Radial distance beyond which a destination pixel has no source pixel.
///
/// Distances in `(1.0, DISK_TOLERANCE]` are clamped onto the rim to hide the
/// seam between the two lobes.
pub const DISK_TOLERANCE: f64 = 1.03;

/// A normalized `(u, v)` coordinate, or `None` when no source pixel exists.
pub type MappedCoordinate = Option<(f64, f64)>;

/// Maps a normalized MBU destination coordinate onto the MBG source layout.
///
/// The destination is split into a left and right lobe. Each lobe is treated as
/// a unit disk: the angle around the disk center selects the source column and
/// the radial distance selects the source row, the left lobe covering the upper
/// half of the source and the right lobe the lower half.
///
/// # Arguments
///
/// * `x` - The normalized x coordinate in `[0, 1]`.
/// * `y` - The normalized y coordinate in `[0, 1]`.
///
/// # Returns
///
/// The normalized source coordinate, or `None` outside the disk tolerance.
///
/// # Example
///
/// ```
/// use texremap_imgproc::mapping::map_mbg_to_mbu;
///
/// // center of the left lobe
/// assert_eq!(map_mbg_to_mbu(0.25, 0.5), Some((0.0, 0.0)));
/// // image corner lies outside the disk
/// assert_eq!(map_mbg_to_mbu(0.0, 0.0), None);
/// ```
pub fn map_mbg_to_mbu(x: f64, y: f64) -> MappedCoordinate {
    let mut x = x * 2.0;
    let left_side = x < 1.0;
    if !left_side {
        x -= 1.0;
    }

    let x = 2.0 * x - 1.0;
    let y = 2.0 * y - 1.0;

    let mut dist = (x * x + y * y).sqrt();
    if dist > DISK_TOLERANCE {
        return None;
    }
    dist = dist.min(1.0);

    let mut ang = y.atan2(x);
    if ang < 0.0 {
        ang += 2.0 * PI;
    }

    let yy = if left_side {
        dist / 2.0
    } else {
        1.0 - dist / 2.0
    };
    let xx = ang / (2.0 * PI);

    Some((xx, yy))
}

/// Maps a normalized MBG destination coordinate onto the MBU source layout.
///
/// This is a horizontal mirror and always yields a coordinate. It is not the
/// analytic inverse of [`map_mbg_to_mbu`].
///
/// # Example
///
/// ```
/// use texremap_imgproc::mapping::map_mbu_to_mbg;
///
/// assert_eq!(map_mbu_to_mbg(0.25, 0.75), Some((0.75, 0.75)));
/// ```
pub fn map_mbu_to_mbg(x: f64, y: f64) -> MappedCoordinate {
    Some((1.0 - x, y))
}

/// The direction of a uv layout conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UvMapping {
    /// Convert an MBG texture into the MBU layout (`g2u`).
    MbgToMbu,
    /// Convert an MBU texture into the MBG layout (`u2g`).
    #[default]
    MbuToMbg,
}

impl UvMapping {
    /// Resolve a selector tag, falling back to [`UvMapping::MbuToMbg`] for unknown tags.
    ///
    /// # Example
    ///
    /// ```
    /// use texremap_imgproc::mapping::UvMapping;
    ///
    /// assert_eq!(UvMapping::from_selector("g2u"), UvMapping::MbgToMbu);
    /// assert_eq!(UvMapping::from_selector("x"), UvMapping::MbuToMbg);
    /// ```
    pub fn from_selector(tag: &str) -> Self {
        tag.parse().unwrap_or_else(|_| {
            log::warn!("unknown mapping '{tag}', falling back to u2g");
            UvMapping::MbuToMbg
        })
    }

    /// The selector tag of this mapping.
    pub fn as_str(&self) -> &'static str {
        match self {
            UvMapping::MbgToMbu => "g2u",
            UvMapping::MbuToMbg => "u2g",
        }
    }

    /// The coordinate function for this direction.
    pub fn mapper(&self) -> fn(f64, f64) -> MappedCoordinate {
        match self {
            UvMapping::MbgToMbu => map_mbg_to_mbu,
            UvMapping::MbuToMbg => map_mbu_to_mbg,
        }
    }

    /// Map a normalized destination coordinate to a normalized source coordinate.
    pub fn map(&self, x: f64, y: f64) -> MappedCoordinate {
        (self.mapper())(x, y)
    }
}

impl FromStr for UvMapping {
    type Err = SelectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "g2u" => Ok(UvMapping::MbgToMbu),
            "u2g" => Ok(UvMapping::MbuToMbg),
            _ => Err(SelectorError::UnknownMapping(s.to_string())),
        }
    }
}

impl std::fmt::Display for UvMapping {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
