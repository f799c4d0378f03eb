pub mod canonical;
pub mod cursor;
pub mod error;
pub mod facelet;
pub mod model;
pub mod notation;
pub mod session;
pub mod solver;
pub mod validation;
pub mod widget;

pub use error::{CdResult, CubeDeckError};
