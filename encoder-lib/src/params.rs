/// How packed arrays lay out their values.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Storage {
    /// Every value takes exactly as many bits as the array's largest value.
    Minimal,

    /// Every value takes a fixed 9-bit field, as older firmware expects.
    Legacy,
}

impl Storage {
    pub const LEGACY_FIELD_WIDTH: u8 = 9;

    pub(crate) fn field_width(self, bit_width: u8) -> u8 {
        match self {
            Storage::Minimal => bit_width,
            Storage::Legacy => Self::LEGACY_FIELD_WIDTH,
        }
    }
}

impl Default for Storage {
    fn default() -> Self {
        Storage::Minimal
    }
}

#[derive(Clone, Debug)]
pub struct Params {
    pub(crate) threshold: u8,
    pub(crate) storage: Storage,
}

impl Params {
    pub const DEFAULT_THRESHOLD: u8 = 50;

    pub fn new(threshold: u8, storage: Storage) -> Self {
        Self { threshold, storage }
    }

    pub fn threshold(&self) -> u8 {
        self.threshold
    }

    pub fn storage(&self) -> Storage {
        self.storage
    }
}

impl Default for Params {
    fn default() -> Self {
        Self::new(Self::DEFAULT_THRESHOLD, Storage::default())
    }
}
