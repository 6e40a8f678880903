use crate::*;

/// Array of non-negative integers stored back to back, MSB first, in
/// equally wide fields; the last byte is padded with zeros.
///
/// `bit_width` is the number of binary digits of the largest value, while
/// `field_width` is how many bits each value actually occupies - the two
/// differ only with [`Storage::Legacy`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PackedArray {
    bytes: Vec<u8>,
    len: usize,
    bit_width: u8,
    field_width: u8,
}

impl PackedArray {
    pub fn pack(values: &[u32], storage: Storage) -> Result<Self> {
        let max = values
            .iter()
            .copied()
            .max()
            .ok_or(Error::DegenerateArray(Degenerate::Empty))?;

        let bit_width = bit_length(max);
        let field_width = storage.field_width(bit_width);

        if bit_width > field_width {
            return Err(Error::DegenerateArray(Degenerate::Overflow {
                value: max,
                field_width,
            }));
        }

        let bits = values
            .iter()
            .flat_map(|&value| (0..field_width).rev().map(move |bit| (value >> bit) & 1 == 1));

        Ok(Self {
            bytes: serialize_bitset(bits),
            len: values.len(),
            bit_width,
            field_width,
        })
    }

    /// Extracts the `idx`-th value; cost depends only on the field width.
    pub fn get(&self, idx: usize) -> Option<u32> {
        if idx >= self.len {
            return None;
        }

        let mut bit = idx * self.field_width as usize;
        let mut value = 0;

        for _ in 0..self.field_width {
            let byte = self.bytes[bit / 8];

            value = (value << 1) | ((byte >> (7 - bit % 8)) & 1) as u32;
            bit += 1;
        }

        Some(value)
    }

    /// Same as [`Self::get()`], but for indices known to be in bounds.
    ///
    /// # Panics
    ///
    /// Panics if `idx` is out of bounds.
    pub fn at(&self, idx: usize) -> u32 {
        match self.get(idx) {
            Some(value) => value,
            None => panic!("index {} out of bounds for {} packed values", idx, self.len),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        (0..self.len).filter_map(move |idx| self.get(idx))
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Number of logical values.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn bit_width(&self) -> u8 {
        self.bit_width
    }

    pub fn field_width(&self) -> u8 {
        self.field_width
    }
}

/// Number of binary digits of `value`; zero still needs one.
pub fn bit_length(value: u32) -> u8 {
    (32 - value.leading_zeros()).max(1) as u8
}

fn serialize_bitset(data: impl IntoIterator<Item = bool>) -> Vec<u8> {
    let data: Vec<_> = data.into_iter().collect();

    data.chunks(8)
        .map(|bits| {
            bits.iter().enumerate().fold(0u8, |byte, (bit_idx, bit)| {
                if *bit {
                    byte | (0x80 >> bit_idx)
                } else {
                    byte
                }
            })
        })
        .collect()
}
