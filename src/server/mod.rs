//! Server-side REST API and business logic.
//!
//! The server owns the ShareIt domain: users, items, bookings, item requests and
//! comments. It uses Axum as the web framework and SeaORM for persistence.
//!
//! # Architecture
//!
//! - **Controller Layer** (`controller/`) - HTTP handlers, DTO to param conversion
//! - **Service Layer** (`service/`) - Business rules (ownership, booking states, uniqueness)
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Request extractors (sharer header, JSON, query, path)
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based configuration
//! - **State** (`state`) - Shared application state
//! - **Startup** (`startup`) - Database connection and migrations
//! - **Router** (`router`) - Route table and OpenAPI document
//!
//! # Request Flow
//!
//! 1. **Router** matches the request and hands it to a controller
//! 2. **Middleware** extractors read the acting user and decode the payload
//! 3. **Controller** converts the DTO to params and calls the service
//! 4. **Service** enforces business rules and orchestrates repositories
//! 5. **Data** queries the database and converts entities to domain models
//! 6. **Controller** converts the domain model back into a DTO

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
