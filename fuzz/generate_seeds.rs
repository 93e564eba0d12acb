#!/usr/bin/env -S cargo +nightly -Zscript
//! Generate seed corpus files for fuzzing.
//! Run: cargo +nightly -Zscript fuzz/generate_seeds.rs

fn header(image_type: u8, cmap: Option<(u16, u8)>, w: u16, h: u16, depth: u8, desc: u8) -> Vec<u8> {
    let mut v = vec![0u8; 18];
    v[2] = image_type;
    if let Some((len, bits)) = cmap {
        v[1] = 1;
        v[5..7].copy_from_slice(&len.to_le_bytes());
        v[7] = bits;
    }
    v[12..14].copy_from_slice(&w.to_le_bytes());
    v[14..16].copy_from_slice(&h.to_le_bytes());
    v[16] = depth;
    v[17] = desc;
    v
}

fn main() {
    use std::fs;
    let dir = "fuzz/corpus/fuzz_decode";
    fs::create_dir_all(dir).unwrap();

    // True-color 2x2, 24-bit, bottom-left
    let mut tc24 = header(2, None, 2, 2, 24, 0);
    tc24.extend_from_slice(&[0, 0, 255, 0, 255, 0, 255, 0, 0, 255, 255, 255]);
    fs::write(format!("{dir}/truecolor24_2x2.tga"), tc24).unwrap();

    // True-color 1x1, 32-bit, top-left
    let mut tc32 = header(2, None, 1, 1, 32, 0x28);
    tc32.extend_from_slice(&[1, 2, 3, 4]);
    fs::write(format!("{dir}/truecolor32_1x1.tga"), tc32).unwrap();

    // 16-bit with alpha bit
    let mut tc16 = header(2, None, 2, 1, 16, 0x21);
    tc16.extend_from_slice(&[0x1F, 0x80, 0xE0, 0x03]);
    fs::write(format!("{dir}/truecolor16_2x1.tga"), tc16).unwrap();

    // Color-mapped 2x1 with a 2-entry 24-bit palette
    let mut cm = header(1, Some((2, 24)), 2, 1, 8, 0);
    cm.extend_from_slice(&[0, 0, 255, 255, 0, 0, 1, 0]);
    fs::write(format!("{dir}/colormapped_2x1.tga"), cm).unwrap();

    // RLE true-color: one run packet and one raw packet
    let mut rle = header(10, None, 4, 1, 24, 0);
    rle.extend_from_slice(&[0x81, 0, 0, 255, 0x01, 1, 2, 3, 4, 5, 6]);
    fs::write(format!("{dir}/rle24_4x1.tga"), rle).unwrap();

    // RLE grayscale, right-to-left
    let mut gray = header(11, None, 3, 1, 8, 0x30);
    gray.extend_from_slice(&[0x82, 128]);
    fs::write(format!("{dir}/rle_gray_3x1.tga"), gray).unwrap();

    // Truncated/malformed seeds for edge coverage
    fs::write(format!("{dir}/empty.bin"), b"").unwrap();
    fs::write(format!("{dir}/short_header.bin"), [0u8, 0, 2, 0, 0]).unwrap();
    fs::write(format!("{dir}/no_pixels.bin"), header(2, None, 4, 4, 24, 0)).unwrap();
    fs::write(format!("{dir}/rle_no_packets.bin"), header(10, None, 4, 4, 32, 0)).unwrap();

    println!("Generated seed corpus in {dir}/");
}
