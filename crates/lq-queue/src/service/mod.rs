//! Service Layer - handle ownership and orchestration

pub mod queue_service;

pub use queue_service::QueueService;
