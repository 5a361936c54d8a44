#![allow(dead_code)]

use rxbind::Record;

#[derive(Default, Record)]
struct Pair {
    #[capture(rx = 5)]
    key: String,
}

fn main() {}
