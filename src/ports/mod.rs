mod completion;

pub use completion::{CompletionClient, MockCompletionClient};
