// Instantiates the sort for a handful of types, build with `cargo build --timings` to see
// what the generic entry points cost downstream.

fn main() {
    let mut ints: Vec<i32> = (0..64).rev().collect();
    smoothsort::sort(&mut ints);

    let mut strings: Vec<String> = ints.iter().map(|i| i.to_string()).collect();
    smoothsort::sort(&mut strings);

    let mut pairs: Vec<(u64, [u8; 300])> = (0..16).rev().map(|i| (i, [0; 300])).collect();
    smoothsort::sort_by(&mut pairs, |a, b| a.0.cmp(&b.0));

    let mut bytes: Vec<u8> = ints.iter().flat_map(|i| i.to_le_bytes()).collect();
    smoothsort::qsort(&mut bytes, ints.len(), 4, |a, b| a.cmp(b));

    println!("{} {} {} {}", ints[0], strings[0], pairs[0].0, bytes[0]);
}
