#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Stats {
    pub frames: usize,
    pub changes: usize,
    pub base_bytes: usize,
    pub indices_bytes: usize,
    pub values_bytes: usize,
    pub ranges_bytes: usize,
}

impl Stats {
    /// Bytes the firmware has to store for the whole animation.
    pub fn total_bytes(&self) -> usize {
        self.base_bytes + self.indices_bytes + self.values_bytes + self.ranges_bytes
    }

    /// Bytes needed to store every frame uncompressed.
    pub fn raw_bytes(&self) -> usize {
        self.frames * self.base_bytes
    }

    /// Returns `None` when there's nothing stored at all.
    pub fn compression_ratio(&self) -> Option<f64> {
        match self.total_bytes() {
            0 => None,
            total => Some(self.raw_bytes() as f64 / total as f64),
        }
    }
}
