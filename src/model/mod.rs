pub mod element;
pub mod node;
pub mod predicate;
pub mod question;
pub mod rule;

pub use element::*;
pub use node::*;
pub use predicate::*;
pub use question::*;
pub use rule::*;
