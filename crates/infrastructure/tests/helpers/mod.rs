mod http_server_mock;

pub use http_server_mock::{closed_port_url, MockHttpServer};
