//! The two output transforms: raw pixel dump and intensity histogram.
//!
//! Both are read-only over the image and write to any `io::Write`, so the
//! binary can hand them locked stdout and the tests a `Vec<u8>`.

use std::io::{self, Write};

use crate::image::GrayImageView;
use crate::roi::Roi;

/// Which transform to run. Exactly one per invocation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Dump,
    Histogram,
}

/// Print a `(x,y) WxH` header, then one line per ROI row with every sample
/// as `0xNN ` (two uppercase hex digits, trailing space).
///
/// A zero-height ROI prints the header alone; a zero-width ROI prints the
/// header and `roi.h` empty row lines.
pub fn write_dump<W: Write>(out: &mut W, img: &GrayImageView<'_>, roi: &Roi) -> io::Result<()> {
    writeln!(out, "({},{}) {}x{}", roi.x, roi.y, roi.w, roi.h)?;
    for y in roi.y..roi.y + roi.h {
        let row = img.row(y);
        for x in roi.x..roi.x + roi.w {
            write!(out, "0x{:02X} ", row[x])?;
        }
        writeln!(out)?;
    }
    Ok(())
}

/// Count sample values inside the ROI. Pure; the table sums to
/// `roi.w * roi.h`.
pub fn histogram(img: &GrayImageView<'_>, roi: &Roi) -> [u64; 256] {
    let mut counts = [0u64; 256];
    for y in roi.y..roi.y + roi.h {
        let row = img.row(y);
        for x in roi.x..roi.x + roi.w {
            counts[row[x] as usize] += 1;
        }
    }
    counts
}

/// Print all 256 histogram bins as `<index>, <count>`, ascending, zero
/// counts included.
pub fn write_histogram<W: Write>(
    out: &mut W,
    img: &GrayImageView<'_>,
    roi: &Roi,
) -> io::Result<()> {
    let counts = histogram(img, roi);
    for (value, count) in counts.iter().enumerate() {
        writeln!(out, "{value}, {count}")?;
    }
    Ok(())
}
