pub mod ascii_table;

pub use ascii_table::AsciiTableRenderer;
