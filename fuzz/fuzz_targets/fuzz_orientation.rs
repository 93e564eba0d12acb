#![no_main]
use libfuzzer_sys::fuzz_target;
use zentga::*;

fuzz_target!(|data: &[u8]| {
    // Toggling the vertical-origin bit must reverse the rows and nothing else.
    if data.len() < 18 {
        return;
    }
    let Ok(a) = decode(data, enough::Unstoppable) else {
        return;
    };
    let mut flipped = data.to_vec();
    flipped[17] ^= 0x20;
    let b = decode(&flipped, enough::Unstoppable).expect("origin bit changed decodability");

    assert_eq!(a.width, b.width);
    assert_eq!(a.height, b.height);
    for y in 0..a.height {
        assert_eq!(a.row(y), b.row(a.height - 1 - y), "row {y}");
    }
});
