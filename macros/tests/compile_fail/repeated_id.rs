#![allow(unused)]

use ytapi_macros::ApiValue;

#[derive(ApiValue)]
enum Order {
    #[value(id = "date")]
    Date,
    #[value(id = "date")]
    AlsoDate,
}

fn main() {}
