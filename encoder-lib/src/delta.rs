use crate::*;
use std::iter;

/// Byte that has to be overwritten to turn one frame into the next one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChangeEvent {
    pub index: u32,
    pub value: u8,
}

/// Changes between consecutive frames of a looping animation: transition
/// `n` turns frame `n` into frame `n + 1`, and the last one turns the final
/// frame back into frame 0.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Delta {
    indices: Vec<u32>,
    values: Vec<u8>,
    ranges: Vec<u32>,
}

impl Delta {
    pub fn build(frames: &[Bitmap]) -> Result<Self> {
        let first = frames.first().ok_or(Error::EmptySequence)?;

        ensure_uniform(frames.iter().map(Bitmap::dimensions))?;

        let nexts = frames.iter().skip(1).chain(iter::once(first));

        let mut indices = Vec::new();
        let mut values = Vec::new();
        let mut ranges = Vec::with_capacity(frames.len() + 1);

        ranges.push(0);

        for (transition, (prev, curr)) in frames.iter().zip(nexts).enumerate() {
            let before = indices.len();

            for change in diff(prev, curr) {
                indices.push(change.index);
                values.push(change.value);
            }

            tracing::debug!(transition, changes = indices.len() - before, "diffed frames");

            ranges.push(indices.len() as u32);
        }

        Ok(Self {
            indices,
            values,
            ranges,
        })
    }

    /// Byte offsets of all changes, transition by transition.
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// New byte values, paired one-to-one with [`Self::indices()`].
    pub fn values(&self) -> &[u8] {
        &self.values
    }

    /// Running number of changes; `ranges[n]..ranges[n + 1]` are the changes
    /// of transition `n`.
    pub fn ranges(&self) -> &[u32] {
        &self.ranges
    }

    pub fn transitions(&self) -> usize {
        self.ranges.len() - 1
    }

    pub fn changes(&self, transition: usize) -> impl Iterator<Item = ChangeEvent> + '_ {
        let range = match self.ranges.get(transition..=transition + 1) {
            Some(&[start, end]) => (start as usize)..(end as usize),
            _ => 0..0,
        };

        range.map(move |i| ChangeEvent {
            index: self.indices[i],
            value: self.values[i],
        })
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Bytes of `curr` that differ from `prev`, in ascending order.
pub fn diff<'a>(prev: &'a Bitmap, curr: &'a Bitmap) -> impl Iterator<Item = ChangeEvent> + 'a {
    prev.bytes()
        .iter()
        .zip(curr.bytes())
        .enumerate()
        .filter(|(_, (prev, curr))| prev != curr)
        .map(|(index, (_, &value))| ChangeEvent {
            index: index as u32,
            value,
        })
}

/// Checks that every frame has the same dimensions as the first one.
pub(crate) fn ensure_uniform(dims: impl IntoIterator<Item = (u32, u32)>) -> Result<(u32, u32)> {
    let mut dims = dims.into_iter();
    let expected = dims.next().ok_or(Error::EmptySequence)?;

    for (idx, found) in dims.enumerate() {
        if found != expected {
            return Err(Error::DimensionMismatch {
                frame: idx + 1,
                expected,
                found,
            });
        }
    }

    Ok(expected)
}
