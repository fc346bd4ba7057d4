pub mod attempt;
pub mod common;
pub mod convincer;
pub mod payment;
pub mod prize;

pub use attempt::*;
pub use common::*;
pub use convincer::*;
pub use payment::*;
pub use prize::*;
