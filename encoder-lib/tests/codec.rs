use oled_anim_lib::*;
use proptest::prelude::*;

fn frames() -> impl Strategy<Value = Vec<Bitmap>> {
    (1u32..=16, 1u32..=3, 1usize..=6).prop_flat_map(|(width, pages, count)| {
        let len = (width * pages) as usize;

        // few distinct byte values, so that consecutive frames share bytes
        prop::collection::vec(prop::collection::vec(0u8..4, len), count).prop_map(move |frames| {
            frames
                .into_iter()
                .map(|bytes| Bitmap::from_pages(width, pages * 8, bytes))
                .collect()
        })
    })
}

fn storage() -> impl Strategy<Value = Storage> {
    prop_oneof![Just(Storage::Minimal), Just(Storage::Legacy)]
}

proptest! {
    #[test]
    fn every_frame_decodes_from_base(frames in frames(), storage in storage()) {
        let anim = Animation::new(storage, frames.clone()).unwrap();
        let mut decoder = Decoder::new(&anim);

        for (k, frame) in frames.iter().enumerate() {
            prop_assert_eq!(decoder.seek(k).unwrap(), frame.bytes());
        }
    }

    #[test]
    fn last_transition_closes_the_loop(frames in frames(), storage in storage()) {
        let anim = Animation::new(storage, frames.clone()).unwrap();
        let mut decoder = Decoder::new(&anim);
        let last = frames.len() - 1;

        prop_assert_eq!(decoder.seek(last).unwrap(), frames[last].bytes());

        decoder.apply(last).unwrap();

        prop_assert_eq!(decoder.frame(), frames[0].bytes());
        prop_assert_eq!(decoder.current(), 0);
    }

    #[test]
    fn ranges_are_monotonic(frames in frames()) {
        let anim = Animation::new(Storage::Minimal, frames.clone()).unwrap();
        let ranges: Vec<_> = anim.ranges().iter().collect();

        prop_assert_eq!(ranges.len(), frames.len() + 1);
        prop_assert_eq!(ranges[0], 0);
        prop_assert!(ranges.windows(2).all(|w| w[0] <= w[1]));

        let total = ranges[frames.len()] as usize;

        prop_assert_eq!(total, anim.values().len());
        prop_assert_eq!(total, anim.delta().indices().len());
        prop_assert_eq!(total + 1, anim.indices().len());

        for n in 0..frames.len() {
            let next = &frames[(n + 1) % frames.len()];
            let differing = diff(&frames[n], next).count();

            prop_assert_eq!((ranges[n + 1] - ranges[n]) as usize, differing);
        }
    }

    #[test]
    fn packed_values_are_recoverable(values in prop::collection::vec(any::<u32>(), 1..64)) {
        let packed = PackedArray::pack(&values, Storage::Minimal).unwrap();
        let width = packed.bit_width() as usize;

        prop_assert_eq!(packed.field_width(), packed.bit_width());
        prop_assert_eq!(packed.bytes().len(), (values.len() * width + 7) / 8);
        prop_assert_eq!(packed.iter().collect::<Vec<_>>(), values);
    }

    #[test]
    fn legacy_values_are_recoverable(values in prop::collection::vec(0u32..512, 1..64)) {
        let packed = PackedArray::pack(&values, Storage::Legacy).unwrap();

        prop_assert_eq!(packed.bytes().len(), (values.len() * 9 + 7) / 8);

        for (idx, &value) in values.iter().enumerate() {
            prop_assert_eq!(packed.get(idx), Some(value));
        }
    }
}

fn image(lit: &[(u32, u32)]) -> RgbaImage {
    let mut img = RgbaImage::from_pixel(8, 8, Rgba([0, 0, 0, 255]));

    for &(x, y) in lit {
        img.put_pixel(x, y, Rgba([200, 200, 200, 255]));
    }

    img
}

#[test]
fn single_byte_toggle() {
    let params = Params::default();
    let images = [image(&[]), image(&[(3, 0), (3, 1), (3, 2), (3, 3)])];
    let anim = Encoder::new(&params).encode(&images).unwrap();

    assert_eq!(anim.delta().ranges(), &[0, 1, 2]);
    assert_eq!(anim.delta().indices(), &[3, 3]);
    assert_eq!(anim.values(), &[0x0f, 0x00]);

    let mut decoder = Decoder::new(&anim);

    assert_eq!(decoder.advance().unwrap(), &[0, 0, 0, 0x0f, 0, 0, 0, 0]);
    assert_eq!(decoder.advance().unwrap(), &[0; 8]);
}

#[test]
fn identical_frames() {
    let params = Params::default();
    let images = [image(&[(0, 0)]), image(&[(0, 0)])];
    let anim = Encoder::new(&params).encode(&images).unwrap();

    assert_eq!(anim.delta().ranges(), &[0, 0, 0]);
    assert!(anim.delta().indices().is_empty());
    assert!(anim.values().is_empty());

    let stats = anim.stats();

    assert_eq!(stats.changes, 0);
    assert_eq!(stats.raw_bytes(), 16);
    assert!(stats.compression_ratio().is_some());
}

#[test]
fn threshold_boundary() {
    let at = RgbaImage::from_pixel(1, 8, Rgba([10, 20, 30, 255]));
    let above = RgbaImage::from_pixel(1, 8, Rgba([11, 20, 30, 255]));

    assert_eq!(Bitmap::rasterize(&at, 20).unwrap().bytes(), &[0x00]);
    assert_eq!(Bitmap::rasterize(&above, 20).unwrap().bytes(), &[0xff]);
}

#[test]
fn invalid_height() {
    let params = Params::default();
    let images = [RgbaImage::new(8, 10)];

    assert_eq!(
        Encoder::new(&params).encode(&images).unwrap_err(),
        Error::InvalidHeight { height: 10 }
    );
}
