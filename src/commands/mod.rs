mod index;

pub use index::{default_output_path, run_index, IndexOptions};
