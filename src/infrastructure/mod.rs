//! Infrastructure layer - Collaborator implementations and services

pub mod logging;
pub mod user;
