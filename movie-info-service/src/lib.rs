pub mod domain;
pub mod error;
pub mod service;
pub mod store;

pub use domain::MovieInfo;
pub use error::StoreError;
pub use service::{AppState, build_router};
pub use store::{InMemoryMovieInfoStore, MovieInfoStore};
