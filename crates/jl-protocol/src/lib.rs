pub mod answer;
pub mod bounds;
pub mod command;
pub mod fun;
pub mod question;
pub mod result;
pub mod snippet;

pub use answer::*;
pub use bounds::*;
pub use command::*;
pub use fun::*;
pub use question::*;
pub use result::*;
pub use snippet::*;
