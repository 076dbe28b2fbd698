pub mod catalog;
pub mod schedule;

pub use schedule::{split_shows, ShowSplit};
