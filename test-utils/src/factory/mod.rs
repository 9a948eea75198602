//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with a `*Factory` builder for customization
//! and a `create_*` convenience function for quick default creation. Factories take the
//! IDs of the rows they reference, so create parents first.
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let owner = factory::user::create_user(&db).await?;
//! let item = factory::item::ItemFactory::new(&db, owner.id)
//!     .name("Drill")
//!     .available(false)
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create user entities
//! - `item` - Create item entities
//! - `item_request` - Create item request entities
//! - `booking` - Create booking entities
//! - `comment` - Create comment entities
//! - `helpers` - Unique values, timestamps and multi-entity setups

pub mod booking;
pub mod comment;
pub mod helpers;
pub mod item;
pub mod item_request;
pub mod user;

pub use booking::create_booking;
pub use comment::create_comment;
pub use item::create_item;
pub use item_request::create_item_request;
pub use user::create_user;
