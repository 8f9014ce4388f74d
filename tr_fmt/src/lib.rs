mod formatter;

pub use formatter::{print, PrAble};
