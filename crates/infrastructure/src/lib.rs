pub mod directory;
pub mod output;
pub mod system;
