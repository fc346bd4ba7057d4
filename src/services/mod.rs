pub mod attempt_service;
pub mod convincer_service;
pub mod payment_service;
pub mod prize_service;

pub use attempt_service::*;
pub use convincer_service::*;
pub use payment_service::*;
pub use prize_service::*;
