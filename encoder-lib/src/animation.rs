use crate::*;

/// Encoded, looping animation: the first frame verbatim plus the packed
/// changes needed to walk through all the other frames.
///
/// The packed index stream starts with a single zero entry, so the change
/// `values[i]` pairs with packed index `i + 1`; that's the addressing the
/// firmware-side decoder uses.
#[derive(Clone, Debug)]
pub struct Animation {
    base: Bitmap,
    delta: Delta,
    indices: PackedArray,
    ranges: PackedArray,
}

impl Animation {
    pub fn new(storage: Storage, frames: Vec<Bitmap>) -> Result<Self> {
        let delta = Delta::build(&frames)?;

        let indices = {
            let mut indices = Vec::with_capacity(delta.len() + 1);

            indices.push(0);
            indices.extend_from_slice(delta.indices());

            PackedArray::pack(&indices, storage)?
        };

        let ranges = PackedArray::pack(delta.ranges(), storage)?;

        let base = frames
            .into_iter()
            .next()
            .ok_or(Error::EmptySequence)?;

        Ok(Self {
            base,
            delta,
            indices,
            ranges,
        })
    }

    pub fn base(&self) -> &Bitmap {
        &self.base
    }

    pub fn delta(&self) -> &Delta {
        &self.delta
    }

    /// Packed change indices, prefixed with a single zero entry.
    pub fn indices(&self) -> &PackedArray {
        &self.indices
    }

    pub fn values(&self) -> &[u8] {
        self.delta.values()
    }

    pub fn ranges(&self) -> &PackedArray {
        &self.ranges
    }

    pub fn frame_count(&self) -> usize {
        self.delta.transitions()
    }

    pub fn stats(&self) -> Stats {
        Stats {
            frames: self.frame_count(),
            changes: self.delta.len(),
            base_bytes: self.base.len(),
            indices_bytes: self.indices.bytes().len(),
            values_bytes: self.values().len(),
            ranges_bytes: self.ranges.bytes().len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bitmap(bytes: &[u8]) -> Bitmap {
        Bitmap::from_pages(bytes.len() as u32, 8, bytes.to_vec())
    }

    #[test]
    fn index_stream_is_prefixed() {
        let frames = vec![bitmap(&[0; 8]), bitmap(&[0, 0, 0, 0x0f, 0, 0, 0, 0])];
        let anim = Animation::new(Storage::Minimal, frames).unwrap();

        assert_eq!(anim.indices().iter().collect::<Vec<_>>(), vec![0, 3, 3]);
        assert_eq!(anim.indices().bit_width(), 2);
        assert_eq!(anim.ranges().iter().collect::<Vec<_>>(), vec![0, 1, 2]);
        assert_eq!(anim.values(), &[0x0f, 0x00]);
        assert_eq!(anim.frame_count(), 2);
    }

    #[test]
    fn identical_frames_still_pack() {
        let frame = bitmap(&[0x55; 8]);
        let anim = Animation::new(Storage::Legacy, vec![frame.clone(), frame]).unwrap();

        assert_eq!(anim.indices().len(), 1);
        assert_eq!(anim.ranges().iter().collect::<Vec<_>>(), vec![0, 0, 0]);
        assert!(anim.values().is_empty());
    }

    #[test]
    fn stats_follow_packed_sizes() {
        let frames = vec![bitmap(&[0; 8]), bitmap(&[0, 0, 0, 0x0f, 0, 0, 0, 0])];
        let stats = Animation::new(Storage::Legacy, frames).unwrap().stats();

        assert_eq!(stats.frames, 2);
        assert_eq!(stats.changes, 2);
        assert_eq!(stats.base_bytes, 8);
        assert_eq!(stats.indices_bytes, 4); // 3 x 9 bits
        assert_eq!(stats.values_bytes, 2);
        assert_eq!(stats.ranges_bytes, 4); // 3 x 9 bits
    }
}
