mod reader;

pub use reader::{InputReader, LineBatch};
