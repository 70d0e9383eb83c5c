#![allow(unused)]

use ytapi_macros::ApiValue;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ApiValue)]
enum Order {
    #[value(id = "date")]
    Date,
    #[value(id = "viewCount")]
    ViewCount,
}

fn main() {
    assert_eq!(Order::ViewCount.as_ref(), "viewCount");
    assert_eq!(Order::try_from("date").ok(), Some(Order::Date));
    assert_eq!(Order::VALUES.len(), 2);
}
