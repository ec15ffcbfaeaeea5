#![no_main]

use libfuzzer_sys::fuzz_target;
use smoothsort::qsort;

// The first byte picks the element width, so rotations wider than the scratch chunk are
// covered too.
fuzz_target!(|data: &[u8]| {
    let Some((&w, rest)) = data.split_first() else {
        return;
    };
    let width = if w & 0x80 != 0 { 257 + (w & 0x7f) as usize } else { 1 + (w & 0x7) as usize };
    let nel = rest.len() / width;

    let mut buf = rest.to_vec();
    qsort(&mut buf, nel, width, |a, b| a.cmp(b));

    let mut expected: Vec<&[u8]> = rest[..nel * width].chunks_exact(width).collect();
    expected.sort();
    let sorted: Vec<&[u8]> = buf[..nel * width].chunks_exact(width).collect();
    assert_eq!(sorted, expected);
    assert_eq!(&buf[nel * width..], &rest[nel * width..]);
});
