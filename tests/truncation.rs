//! Cutting a valid header short must always report `Truncated`
//!
//! Never a panic, never a partially populated record.

use lince::{detect, DetectOptions, Error, SliceSource};

fn assert_all_prefixes_truncated(data: &[u8], options: DetectOptions) {
    for len in 0..data.len() {
        let result = detect(&mut SliceSource::new(&data[..len]), options);
        assert_eq!(
            result.map(|m| (m.format(), m.width(), m.height())),
            Err(Error::Truncated),
            "prefix of {len} bytes"
        );
    }
}

#[test]
fn empty_input() {
    assert_eq!(
        detect(&mut SliceSource::new(&[]), DetectOptions::new()),
        Err(Error::Truncated)
    );
    assert_eq!(
        detect(&mut SliceSource::new(&[0x47]), DetectOptions::new()),
        Err(Error::Truncated)
    );
}

#[test]
fn gif() {
    // Logical screen, comment extension, one image, trailer
    let mut v = b"GIF89a".to_vec();
    v.extend([3, 0, 2, 0, 0x70, 0, 0]);
    v.extend([0x21, 0xFE, 5]);
    v.extend(b"hello");
    v.push(0);
    v.extend([0x2C, 0, 0, 0, 0, 3, 0, 2, 0, 0x00, 2, 0]);
    v.push(0x3B);

    let options = DetectOptions::new().collect_comments(true).count_images(true);
    assert_all_prefixes_truncated(&v, options);
}

#[test]
fn png() {
    let mut v = vec![0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];
    v.extend(13u32.to_be_bytes());
    v.extend(b"IHDR");
    v.extend(3u32.to_be_bytes());
    v.extend(2u32.to_be_bytes());
    v.extend([8, 2, 0, 0, 0]);
    assert_all_prefixes_truncated(&v, DetectOptions::new());
}

#[test]
fn jpeg() {
    // APP0 with JFIF density, a comment, then the frame header
    let mut v = vec![0xFF, 0xD8];
    v.extend([0xFF, 0xE0, 0x00, 0x10]);
    v.extend(b"JFIF\0");
    v.extend([1, 2, 1, 0, 72, 0, 72, 0, 0]);
    v.extend([0xFF, 0xFE, 0x00, 0x07]);
    v.extend(b"hello");
    v.extend([0xFF, 0xC0, 0x00, 0x11]);
    v.extend([8, 0, 2, 0, 3, 3]);

    let options = DetectOptions::new().collect_comments(true);
    assert_all_prefixes_truncated(&v, options);
}

#[test]
fn bmp() {
    let mut v = b"BM".to_vec();
    v.extend([0; 12]);
    v.extend(40u32.to_le_bytes());
    v.extend(3i32.to_le_bytes());
    v.extend(2i32.to_le_bytes());
    v.extend(1u16.to_le_bytes());
    v.extend(24u16.to_le_bytes());
    v.extend([0; 16]);
    assert_all_prefixes_truncated(&v, DetectOptions::new());
}

#[test]
fn pcx() {
    let mut v = vec![0x0A, 5];
    let mut h = [0u8; 64];
    h[0] = 1;
    h[1] = 8;
    h[6] = 2;
    h[8] = 1;
    h[63] = 1;
    v.extend(h);
    assert_all_prefixes_truncated(&v, DetectOptions::new());
}

#[test]
fn iff() {
    // Includes a skipped chunk so the cut can land inside a skip
    let mut v = b"FORM".to_vec();
    v.extend(40u32.to_be_bytes());
    v.extend(b"ILBM");
    v.extend(b"ANNO");
    v.extend(6u32.to_be_bytes());
    v.extend(b"note\0\0");
    v.extend(b"BMHD");
    v.extend(9u32.to_be_bytes());
    v.extend([0, 3, 0, 2, 0, 0, 0, 0, 8]);
    assert_all_prefixes_truncated(&v, DetectOptions::new());
}

#[test]
fn ras() {
    let mut v = vec![0x59, 0xA6, 0x6A, 0x95];
    v.extend(3u32.to_be_bytes());
    v.extend(2u32.to_be_bytes());
    v.extend(24u32.to_be_bytes());
    assert_all_prefixes_truncated(&v, DetectOptions::new());
}

#[test]
fn psd() {
    let mut v = b"8BPS".to_vec();
    v.extend([0, 1]);
    v.extend([0; 6]);
    v.extend(3u16.to_be_bytes());
    v.extend(2u32.to_be_bytes());
    v.extend(3u32.to_be_bytes());
    v.extend(8u16.to_be_bytes());
    v.extend(3u16.to_be_bytes());
    assert_all_prefixes_truncated(&v, DetectOptions::new());
}

#[test]
fn pnm() {
    // A cut at a line boundary leaves a required line missing entirely
    assert_eq!(
        detect(&mut SliceSource::new(b"P2\n"), DetectOptions::new()),
        Err(Error::Truncated)
    );
    assert_eq!(
        detect(&mut SliceSource::new(b"P2\n3 2\n"), DetectOptions::new()),
        Err(Error::Truncated)
    );
}
