mod reader;

pub use reader::XlsxRowSource;
