#![allow(unused_imports)]

mod mock_ports;

pub use mock_ports::{MockHostResolver, MockNodeDirectory, PipeTableRenderer};
