pub mod aggregate;
pub mod ecdf;
pub mod error;
pub mod io;
pub mod model;
