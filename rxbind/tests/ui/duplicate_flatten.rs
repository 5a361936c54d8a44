#![allow(dead_code)]

use rxbind::Record;

#[derive(Default, Record)]
struct Outer {
    #[capture(flatten, flatten)]
    inner: Inner,
}

#[derive(Default, Record)]
struct Inner {
    #[capture(rx = "k")]
    key: String,
}

fn main() {}
