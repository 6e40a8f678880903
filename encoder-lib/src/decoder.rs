use crate::*;

/// Reference decoder, doing exactly what the firmware does: it owns a single
/// framebuffer and patches it in place, reading the packed arrays through
/// random access only.
#[derive(Clone, Debug)]
pub struct Decoder<'a> {
    anim: &'a Animation,
    frame: Vec<u8>,
    current: usize,
}

impl<'a> Decoder<'a> {
    pub fn new(anim: &'a Animation) -> Self {
        Self {
            anim,
            frame: anim.base().bytes().to_vec(),
            current: 0,
        }
    }

    /// Number of the frame currently held in the framebuffer.
    pub fn current(&self) -> usize {
        self.current
    }

    pub fn frame(&self) -> &[u8] {
        &self.frame
    }

    /// Applies transition `n`, i.e. the changes turning frame `n` into frame
    /// `n + 1` (or into frame 0 for the last transition).
    pub fn apply(&mut self, n: usize) -> Result<()> {
        let frame_count = self.anim.frame_count();

        if n >= frame_count {
            return Err(Error::FrameOutOfRange {
                frame: n,
                frame_count,
            });
        }

        let ranges = self.anim.ranges();
        let start = ranges.at(n) as usize;
        let end = ranges.at(n + 1) as usize;

        if start != end {
            let values = self.anim.values();
            let indices = self.anim.indices();

            for i in start..end {
                self.frame[indices.at(i + 1) as usize] = values[i];
            }
        }

        self.current = (n + 1) % frame_count;

        Ok(())
    }

    /// Moves to the next frame, wrapping around after the last one.
    pub fn advance(&mut self) -> Result<&[u8]> {
        self.apply(self.current)?;

        Ok(&self.frame)
    }

    /// Rebuilds frame `k` from the base frame.
    pub fn seek(&mut self, k: usize) -> Result<&[u8]> {
        let frame_count = self.anim.frame_count();

        if k >= frame_count {
            return Err(Error::FrameOutOfRange {
                frame: k,
                frame_count,
            });
        }

        self.frame.copy_from_slice(self.anim.base().bytes());
        self.current = 0;

        for n in 0..k {
            self.apply(n)?;
        }

        Ok(&self.frame)
    }
}
