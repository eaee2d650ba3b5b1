mod test_server;

pub use test_server::TestServer;

pub const TEST_USERNAME: &str = "admin";
pub const TEST_PASSWORD: &str = "hunter2";
