//! GIF block walking: image counting, interlacing, comments

use lince::{detect, DetectOptions, ImageMetadata, SliceSource};

/// Signature plus a 3x2 logical screen descriptor
fn screen(flags: u8) -> Vec<u8> {
    let mut v = b"GIF89a".to_vec();
    v.extend([3, 0, 2, 0, flags, 0, 0]);
    v
}

/// Image descriptor block with empty pixel data
fn image_block(flags: u8) -> Vec<u8> {
    let mut v = vec![0x2C];
    v.extend([0, 0, 0, 0, 3, 0, 2, 0, flags]);
    v.extend([2, 0]); // LZW code size, sub-block terminator
    v
}

fn comment_block(sub_blocks: &[&[u8]]) -> Vec<u8> {
    let mut v = vec![0x21, 0xFE];
    for block in sub_blocks {
        v.push(block.len() as u8);
        v.extend_from_slice(block);
    }
    v.push(0);
    v
}

fn detect_gif(data: &[u8], options: DetectOptions) -> ImageMetadata {
    detect(&mut SliceSource::new(data), options).unwrap()
}

#[test]
fn counting_disabled_reports_one_image() {
    let mut v = screen(0x70);
    for _ in 0..3 {
        v.extend(image_block(0));
    }
    v.push(0x3B);

    let metadata = detect_gif(&v, DetectOptions::new());
    assert_eq!(metadata.number_of_images(), 1);
}

#[test]
fn counting_reports_every_descriptor() {
    let mut v = screen(0x70);
    for _ in 0..3 {
        v.extend(image_block(0));
    }
    v.push(0x3B);

    let metadata = detect_gif(&v, DetectOptions::new().count_images(true));
    assert_eq!(metadata.number_of_images(), 3);
}

#[test]
fn global_color_table_is_skipped() {
    // Table flag set with 2 bits per entry index: 8 entries of 3 bytes
    let mut v = screen(0x72 | 0x80);
    v.extend([0; 24]);
    v.extend(image_block(0));
    v.push(0x3B);

    let metadata = detect_gif(&v, DetectOptions::new().count_images(true));
    assert_eq!(metadata.number_of_images(), 1);
}

#[test]
fn interlace_flag() {
    let mut v = screen(0x70);
    v.extend(image_block(0x40));
    v.push(0x3B);

    let metadata = detect_gif(&v, DetectOptions::new().count_images(true));
    assert!(metadata.progressive());

    // Without counting the descriptor is never reached
    let metadata = detect_gif(&v, DetectOptions::new());
    assert!(!metadata.progressive());
}

#[test]
fn local_color_table_raises_bit_depth() {
    // Global descriptor says 1 bit, the local table holds 2^8 entries
    let mut v = screen(0x00);
    v.push(0x2C);
    v.extend([0, 0, 0, 0, 3, 0, 2, 0, 0x87]);
    v.extend(vec![0; 768]); // local color table
    v.extend([2, 0]); // LZW code size, sub-block terminator
    v.push(0x3B);

    let metadata = detect_gif(&v, DetectOptions::new().count_images(true));
    assert_eq!(metadata.bits_per_pixel(), 8);
}

#[test]
fn comment_collected() {
    let mut v = screen(0x70);
    v.extend(comment_block(&[b"hello"]));
    v.extend(image_block(0));
    v.push(0x3B);

    let options = DetectOptions::new().collect_comments(true).count_images(true);
    let metadata = detect_gif(&v, options);
    assert_eq!(metadata.comments(), ["hello"]);
}

#[test]
fn comment_spanning_sub_blocks() {
    let mut v = screen(0x70);
    v.extend(comment_block(&[b"he", b"llo"]));
    v.extend(image_block(0));
    v.push(0x3B);

    let options = DetectOptions::new().collect_comments(true).count_images(true);
    let metadata = detect_gif(&v, options);
    assert_eq!(metadata.comments(), ["hello"]);
}

#[test]
fn comment_ignored_without_opt_in() {
    let mut v = screen(0x70);
    v.extend(comment_block(&[b"hello"]));
    v.extend(image_block(0));
    v.push(0x3B);

    let metadata = detect_gif(&v, DetectOptions::new().count_images(true));
    assert!(metadata.comments().is_empty());
}

#[test]
fn other_extensions_are_skipped() {
    let mut v = screen(0x70);
    // Graphic control extension
    v.extend([0x21, 0xF9, 4, 0, 0, 0, 0, 0]);
    v.extend(image_block(0));
    v.push(0x3B);

    let options = DetectOptions::new().collect_comments(true).count_images(true);
    let metadata = detect_gif(&v, options);
    assert_eq!(metadata.number_of_images(), 1);
    assert!(metadata.comments().is_empty());
}
