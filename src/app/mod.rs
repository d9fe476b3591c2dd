// mainから直接呼び出すアプリケーションの動作モード(H, T)のモジュール

mod parser;

pub use parser::{Mode, ParserApp};
