pub mod mock_store;
mod seed;

pub use mock_store::*;
