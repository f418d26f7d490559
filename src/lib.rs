pub mod cli;
pub mod config;
pub mod dataset;
pub mod error;
pub mod scanner;

pub use dataset::{build_index, get_dataset, load_clip_list, load_labels};
