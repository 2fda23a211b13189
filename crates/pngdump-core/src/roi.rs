//! Region-of-interest model.
//!
//! `RoiSpec` holds the raw integers parsed from a `X,Y:WxH` argument and may
//! be negative or oversized; `Roi` is the validated rectangle, guaranteed to
//! lie inside the image it was resolved against. Transforms only ever see a
//! `Roi`.

use std::str::FromStr;

/// A requested rectangle, as parsed. Not yet checked against an image.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoiSpec {
    pub x: i64,
    pub y: i64,
    pub w: i64,
    pub h: i64,
}

/// A rectangle known to satisfy `x + w <= width` and `y + h <= height` for
/// the image it was resolved against.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Roi {
    pub x: usize,
    pub y: usize,
    pub w: usize,
    pub h: usize,
}

/// The `--roi` argument did not match `X,Y:WxH`.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("expected X,Y:WxH")]
pub struct ParseRoiError;

/// Rectangle validation errors, naming the offending dimension.
#[derive(thiserror::Error, Debug)]
pub enum RoiError {
    #[error("roi {dim}={value}: must be non-negative")]
    Negative { dim: &'static str, value: i64 },
    #[error("roi x={x} w={w} out of [0, {width}] range")]
    WidthExceeded { x: i64, w: i64, width: usize },
    #[error("roi y={y} h={h} out of [0, {height}] range")]
    HeightExceeded { y: i64, h: i64, height: usize },
}

impl FromStr for RoiSpec {
    type Err = ParseRoiError;

    /// Parse the literal pattern `X,Y:WxH`, four integers with optional
    /// sign. No whitespace, no trailing characters.
    fn from_str(s: &str) -> Result<Self, ParseRoiError> {
        let (x, rest) = s.split_once(',').ok_or(ParseRoiError)?;
        let (y, extent) = rest.split_once(':').ok_or(ParseRoiError)?;
        let (w, h) = extent.split_once('x').ok_or(ParseRoiError)?;
        Ok(RoiSpec {
            x: parse_coord(x)?,
            y: parse_coord(y)?,
            w: parse_coord(w)?,
            h: parse_coord(h)?,
        })
    }
}

fn parse_coord(s: &str) -> Result<i64, ParseRoiError> {
    s.parse::<i64>().map_err(|_| ParseRoiError)
}

impl RoiSpec {
    /// Validate this rectangle against image dimensions.
    ///
    /// Callable only once the image is decoded; the full-image default never
    /// goes through here (see [`Roi::full`]).
    pub fn resolve(self, width: usize, height: usize) -> Result<Roi, RoiError> {
        if self.x < 0 {
            return Err(RoiError::Negative {
                dim: "x",
                value: self.x,
            });
        }
        if self.y < 0 {
            return Err(RoiError::Negative {
                dim: "y",
                value: self.y,
            });
        }
        if self.w < 0 {
            return Err(RoiError::Negative {
                dim: "w",
                value: self.w,
            });
        }
        if self.h < 0 {
            return Err(RoiError::Negative {
                dim: "h",
                value: self.h,
            });
        }

        // Sums are checked in i64; overflow counts as out of range.
        let fits_x = self
            .x
            .checked_add(self.w)
            .is_some_and(|end| end <= width as i64);
        if !fits_x {
            return Err(RoiError::WidthExceeded {
                x: self.x,
                w: self.w,
                width,
            });
        }
        let fits_y = self
            .y
            .checked_add(self.h)
            .is_some_and(|end| end <= height as i64);
        if !fits_y {
            return Err(RoiError::HeightExceeded {
                y: self.y,
                h: self.h,
                height,
            });
        }

        Ok(Roi {
            x: self.x as usize,
            y: self.y as usize,
            w: self.w as usize,
            h: self.h as usize,
        })
    }
}

impl Roi {
    /// The whole image: the default when no `--roi` is given.
    pub fn full(width: usize, height: usize) -> Roi {
        Roi {
            x: 0,
            y: 0,
            w: width,
            h: height,
        }
    }

    /// True when the rectangle covers zero pixels.
    pub fn is_empty(&self) -> bool {
        self.w == 0 || self.h == 0
    }
}
