//! Classification of grammars.

pub mod ll;

pub use self::ll::{Conflict, LlClassification, LlNonterminalClass, LlParseTable};
