pub mod driver;
pub mod eval;
pub mod negamax;
pub mod ordering;
pub mod time;
pub mod tt;

pub use driver::{Engine, SearchReport};
pub use negamax::{Node, Searcher};
