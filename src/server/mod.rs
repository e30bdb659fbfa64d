//! Server-side API backend.
//!
//! This module contains the complete backend for the catalog: API endpoints, query
//! construction, and persistence. The backend uses Axum as the web framework and SeaORM
//! for database operations.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and DTO conversion
//! - **Service Layer** (`service/`) - Timestamp stamping, query orchestration, not-found mapping
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models, typed queries and operation parameters
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (optional database pool)
//! - **Startup** (`startup`) - Database connection, migrations and shutdown signal
//! - **Router** (`router`) - Axum route configuration, CORS and API documentation
//! - **Extract** (`extract`) - JSON and query extractors that reject with `AppError`
//!
//! # Request Flow
//!
//! 1. **Router** receives HTTP request and routes to the appropriate controller
//! 2. **Extractors** validate the query string or JSON body (422 on failure)
//! 3. **Controller** builds params or a typed query, resolves the store, calls the service
//! 4. **Service** stamps timestamps and delegates to the repository
//! 5. **Data** queries the database, converts entities to domain models
//! 6. **Controller** converts domain models to DTOs and returns the HTTP response

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod extract;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
