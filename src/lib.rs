// ABOUTME: Main library entry point for the Health Copilot dashboard backend
// ABOUTME: Wires configuration, providers, recovery scoring, LLM services, and HTTP routes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Health Copilot Contributors

#![deny(unsafe_code)]

//! # Health Copilot
//!
//! Backend for a personal health dashboard. It reads daily metrics from a
//! wearable source, derives a composite recovery score against a short-term
//! baseline, and uses an external LLM to produce recommendations and to answer
//! chat questions grounded in today's data.
//!
//! ## Architecture
//!
//! - **Core** (`health-copilot-core`): models, error codes, constants
//! - **Providers** (`health-copilot-providers`): wearable source and trend aggregation
//! - **Intelligence** (`health-copilot-intelligence`): baseline and recovery scoring
//! - **This crate**: configuration, logging, LLM clients, services, and the axum server
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use health_copilot::config::ServerConfig;
//! use health_copilot::resources::ServerResources;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::from_env()?;
//!     let resources = Arc::new(ServerResources::new(config)?);
//!     health_copilot::server::run(resources).await
//! }
//! ```

/// Health action generation and output parsing
pub mod actions;

/// Health-aware chat service
pub mod chat;

/// Environment configuration
pub mod config;

/// Application constants
pub mod constants;

/// Dashboard overview, history, and action services
pub mod dashboard;

/// Error types and HTTP error responses
pub mod errors;

/// LLM provider abstraction and clients
pub mod llm;

/// Structured logging setup
pub mod logging;

/// HTTP middleware
pub mod middleware;

/// Shared server resources
pub mod resources;

/// HTTP route groups
pub mod routes;

/// Router assembly and server lifecycle
pub mod server;
