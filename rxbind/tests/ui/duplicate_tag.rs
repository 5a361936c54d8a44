#![allow(dead_code)]

use rxbind::Record;

#[derive(Default, Record)]
struct Pair {
    #[capture(rx = "k", rx = "key")]
    key: String,
}

fn main() {}
