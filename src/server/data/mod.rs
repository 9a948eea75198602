//! Database repository layer for all domain entities.
//!
//! Each repository wraps a borrowed `DatabaseConnection`, runs SeaORM queries against
//! the entities of the `entity` crate and converts results into domain models so the
//! service layer never sees entity types.

pub mod booking;
pub mod comment;
pub mod item;
pub mod item_request;
pub mod user;

#[cfg(test)]
mod test;
