mod completion_http;

pub use completion_http::HttpCompletionClient;
