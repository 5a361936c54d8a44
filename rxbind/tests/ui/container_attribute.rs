#![allow(dead_code)]

use rxbind::Record;

#[derive(Default, Record)]
#[capture(rx = "x")]
struct Pair {
    #[capture(rx = "k")]
    key: String,
}

fn main() {}
