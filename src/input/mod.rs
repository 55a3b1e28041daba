mod reader;

pub use reader::{InputError, InputReader, MAX_MESSAGE_SIZE, MessageSource};
