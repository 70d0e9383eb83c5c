#![allow(unused)]

use ytapi_macros::ApiValue;

#[derive(ApiValue)]
enum Order {
    #[value(id = "date")]
    Date(u8),
}

fn main() {}
