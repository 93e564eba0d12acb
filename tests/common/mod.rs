//! Minimal TGA writer for building test inputs.

#![allow(dead_code)]

#[derive(Clone, Debug)]
pub struct TgaFile {
    pub image_id: Vec<u8>,
    pub color_map_type: u8,
    pub image_type: u8,
    pub first_entry: u16,
    pub map_length: u16,
    pub entry_size: u8,
    pub width: u16,
    pub height: u16,
    pub depth: u8,
    pub descriptor: u8,
    pub color_map: Vec<u8>,
    pub pixels: Vec<u8>,
}

impl TgaFile {
    /// Bottom-left origin, no color map, no image ID.
    pub fn new(image_type: u8, width: u16, height: u16, depth: u8) -> Self {
        Self {
            image_id: Vec::new(),
            color_map_type: 0,
            image_type,
            first_entry: 0,
            map_length: 0,
            entry_size: 0,
            width,
            height,
            depth,
            descriptor: 0,
            color_map: Vec::new(),
            pixels: Vec::new(),
        }
    }

    pub fn top_origin(mut self) -> Self {
        self.descriptor |= 0x20;
        self
    }

    pub fn right_origin(mut self) -> Self {
        self.descriptor |= 0x10;
        self
    }

    pub fn image_id(mut self, id: &[u8]) -> Self {
        self.image_id = id.to_vec();
        self
    }

    /// `entries` is the stored table bytes, including any skipped prefix.
    pub fn color_map(mut self, first_entry: u16, length: u16, entry_size: u8, entries: &[u8]) -> Self {
        self.color_map_type = 1;
        self.first_entry = first_entry;
        self.map_length = length;
        self.entry_size = entry_size;
        self.color_map = entries.to_vec();
        self
    }

    pub fn pixels(mut self, bytes: &[u8]) -> Self {
        self.pixels = bytes.to_vec();
        self
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(18 + self.image_id.len() + self.pixels.len());
        out.push(self.image_id.len() as u8);
        out.push(self.color_map_type);
        out.push(self.image_type);
        out.extend_from_slice(&self.first_entry.to_le_bytes());
        out.extend_from_slice(&self.map_length.to_le_bytes());
        out.push(self.entry_size);
        out.extend_from_slice(&0u16.to_le_bytes());
        out.extend_from_slice(&0u16.to_le_bytes());
        out.extend_from_slice(&self.width.to_le_bytes());
        out.extend_from_slice(&self.height.to_le_bytes());
        out.push(self.depth);
        out.push(self.descriptor);
        out.extend_from_slice(&self.image_id);
        out.extend_from_slice(&self.color_map);
        out.extend_from_slice(&self.pixels);
        out
    }
}

/// Greedy RLE packing of `group_bytes`-sized pixel groups.
pub fn rle_encode(groups: &[u8], group_bytes: usize) -> Vec<u8> {
    let px: Vec<&[u8]> = groups.chunks_exact(group_bytes).collect();
    let mut out = Vec::new();
    let mut i = 0;
    while i < px.len() {
        let mut run = 1;
        while i + run < px.len() && run < 128 && px[i + run] == px[i] {
            run += 1;
        }
        if run > 1 {
            out.push(0x80 | (run - 1) as u8);
            out.extend_from_slice(px[i]);
            i += run;
            continue;
        }
        let start = i;
        while i < px.len() && i - start < 128 && !(i + 1 < px.len() && px[i + 1] == px[i]) {
            i += 1;
        }
        out.push((i - start - 1) as u8);
        for p in &px[start..i] {
            out.extend_from_slice(p);
        }
    }
    out
}

pub fn checkerboard(w: usize, h: usize, bpp: usize) -> Vec<u8> {
    let mut pixels = vec![0u8; w * h * bpp];
    for y in 0..h {
        for x in 0..w {
            let off = (y * w + x) * bpp;
            for c in 0..bpp {
                pixels[off + c] = if (x + y) % 2 == 0 {
                    180 + (c as u8 * 20)
                } else {
                    10 + (c as u8 * 30)
                };
            }
        }
    }
    pixels
}

pub fn noise_pattern(len: usize, seed: u32) -> Vec<u8> {
    let mut out = vec![0u8; len];
    let mut state: u32 = seed | 1;
    for p in out.iter_mut() {
        state ^= state << 13;
        state ^= state >> 17;
        state ^= state << 5;
        *p = state as u8;
    }
    out
}

/// Reverse row order of an RGBA8 buffer.
pub fn flip_rows(rgba: &[u8], width: usize) -> Vec<u8> {
    rgba.chunks_exact(width * 4).rev().flatten().copied().collect()
}
