//! Server-side API backend and business logic.
//!
//! This module contains the complete backend for the hotel booking application: HTTP
//! endpoints, business rules, data access, and infrastructure. The backend uses Axum
//! as the web framework and SeaORM over SQLite for persistence.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers, validation, and DTO conversion
//! - **Service Layer** (`service/`) - Business rules such as duplicate detection and authentication
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models, the response envelope, and operation parameters
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (database, password hasher)
//! - **Startup** (`startup`) - Database connection, migrations, CORS, and shutdown signal
//! - **Router** (`router`) - Axum route configuration and API documentation
//!
//! # Request Flow
//!
//! 1. **Router** receives the HTTP request and routes it to a controller
//! 2. **Controller** validates the body, converts DTOs to params, calls the service
//! 3. **Service** applies business rules and returns an [`Envelope`](model::envelope::Envelope)
//! 4. **Data** queries the database, converts entities to domain models
//! 5. **Controller** converts the envelope to a DTO and picks the status code

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
