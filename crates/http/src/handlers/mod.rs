pub mod ask;
pub mod page;
