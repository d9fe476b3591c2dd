#![warn(rust_2018_idioms)]

pub mod app;
pub mod model;
pub mod notation;
pub mod util;
