#![allow(dead_code)]

use rxbind::Record;

#[derive(Default, Record)]
pub enum Mode {
    #[default]
    Fast,
}

fn main() {}
