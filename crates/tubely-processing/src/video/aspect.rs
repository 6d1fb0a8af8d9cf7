use std::fmt::{Display, Formatter, Result as FmtResult};

/// Orientation bucket of a video; doubles as the object key prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AspectRatio {
    Landscape,
    Portrait,
    Other,
}

impl AspectRatio {
    pub fn as_str(&self) -> &'static str {
        match self {
            AspectRatio::Landscape => "landscape",
            AspectRatio::Portrait => "portrait",
            AspectRatio::Other => "other",
        }
    }
}

impl Display for AspectRatio {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

/// Classify frame geometry with integer division.
///
/// `16 / 9` truncates to 1, so a frame is landscape when `width / height == 1`
/// and portrait when `height / width == 1`. Square frames satisfy both and are
/// `Other`, as are zero-sized frames.
pub fn classify(width: u32, height: u32) -> AspectRatio {
    const WIDESCREEN: u32 = 16 / 9;

    if width == 0 || height == 0 || width == height {
        return AspectRatio::Other;
    }

    if width / height == WIDESCREEN {
        AspectRatio::Landscape
    } else if height / width == WIDESCREEN {
        AspectRatio::Portrait
    } else {
        AspectRatio::Other
    }
}
