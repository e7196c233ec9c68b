
pub(crate) use mock_server::{MockResponse, MockServer};
