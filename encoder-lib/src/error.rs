use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Error {
    #[error("animation has no frames")]
    EmptySequence,

    #[error("frame {frame} has dimensions {found:?}, but frame 0 has {expected:?}")]
    DimensionMismatch {
        frame: usize,
        expected: (u32, u32),
        found: (u32, u32),
    },

    #[error("frame height {height} is not a multiple of 8")]
    InvalidHeight { height: u32 },

    #[error("cannot pack array: {0}")]
    DegenerateArray(Degenerate),

    #[error("frame {frame} is out of range (animation has {frame_count} frames)")]
    FrameOutOfRange { frame: usize, frame_count: usize },
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Degenerate {
    #[error("array is empty")]
    Empty,

    #[error("value {value} does not fit in a {field_width}-bit field")]
    Overflow { value: u32, field_width: u8 },
}
