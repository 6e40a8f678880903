use crate::*;
use std::fmt;

/// C header embedding an [`Animation`] into QMK firmware, together with the
/// routine that plays it on the OLED.
pub struct Header<'a> {
    anim: &'a Animation,
}

impl<'a> Header<'a> {
    const ENTRIES_PER_LINE: usize = 15;

    pub fn new(anim: &'a Animation) -> Self {
        Self { anim }
    }

    fn write_array<T>(
        f: &mut fmt::Formatter<'_>,
        decl: &str,
        items: &[T],
        fmt_item: impl Fn(&T) -> String,
    ) -> fmt::Result {
        writeln!(f, "{} = {{", decl)?;

        for items in items.chunks(Self::ENTRIES_PER_LINE) {
            write!(f, "\t")?;

            for item in items {
                write!(f, "{}, ", fmt_item(item))?;
            }

            writeln!(f)?;
        }

        writeln!(f, "}};")?;
        writeln!(f)
    }
}

impl fmt::Display for Header<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let anim = self.anim;
        let stats = anim.stats();

        let ratio = match stats.compression_ratio() {
            Some(ratio) => format!("{:.3} to 1", ratio),
            None => "n/a".into(),
        };

        let hex = |byte: &u8| format!("{:#04x}", byte);
        let bin = |byte: &u8| format!("{:#010b}", byte);

        writeln!(f, "// Generated by oled-anim; place these definitions at the top of the file.")?;
        writeln!(f)?;
        writeln!(f, "#define ANIM_SIZE {}", stats.base_bytes)?;
        writeln!(f, "#define IDLE_FRAMES {}", stats.frames)?;
        writeln!(f, "#define ANI_BYTE_SIZE 8")?;
        writeln!(f)?;
        writeln!(f, "// Compression ratio: {}", ratio)?;
        writeln!(f, "// Estimated PROGMEM usage: {} bytes", stats.total_bytes())?;
        writeln!(f)?;

        Self::write_array(
            f,
            "static const char PROGMEM frame[]",
            anim.base().bytes(),
            hex,
        )?;

        Self::write_array(
            f,
            "static const uint8_t cumsum_inds[]",
            anim.ranges().bytes(),
            bin,
        )?;

        Self::write_array(
            f,
            "static const uint8_t change_inds[]",
            anim.indices().bytes(),
            bin,
        )?;

        Self::write_array(
            f,
            "static const char PROGMEM change_vals[]",
            anim.values(),
            hex,
        )?;

        writeln!(f, "static uint32_t get_num(const uint8_t* arr, uint8_t bitsize, uint16_t index){{")?;
        writeln!(f, "\tuint32_t bit = (uint32_t)bitsize * index;")?;
        writeln!(f, "\tuint32_t res = 0;")?;
        writeln!(f, "\tfor (uint8_t i = 0; i < bitsize; i++, bit++){{")?;
        writeln!(f, "\t\tres = (res << 1) | ((arr[bit / ANI_BYTE_SIZE] >> (7 - (bit % ANI_BYTE_SIZE))) & 1);")?;
        writeln!(f, "\t}}")?;
        writeln!(f, "\treturn res;")?;
        writeln!(f, "}}")?;
        writeln!(f)?;

        writeln!(f, "static void change_frame_bytewise(uint8_t frame_number){{")?;
        writeln!(
            f,
            "\tuint16_t index_start = get_num(cumsum_inds, {}, frame_number);",
            anim.ranges().field_width()
        )?;
        writeln!(
            f,
            "\tuint16_t index_end = get_num(cumsum_inds, {}, frame_number + 1);",
            anim.ranges().field_width()
        )?;
        writeln!(f, "\tif (index_start != index_end){{")?;
        writeln!(f, "\t\tfor (uint16_t i = index_start; i < index_end; i++){{")?;
        writeln!(
            f,
            "\t\t\toled_write_raw_byte(pgm_read_byte(change_vals + i), get_num(change_inds, {}, i + 1));",
            anim.indices().field_width()
        )?;
        writeln!(f, "\t\t}}")?;
        writeln!(f, "\t}}")?;
        writeln!(f, "}}")
    }
}
