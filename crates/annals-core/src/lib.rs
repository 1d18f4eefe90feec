//! Annals Core Types and Definitions
//!
//! This crate provides the foundational types shared by the Annals network
//! tooling. It includes:
//!
//! - **Geometry**: Basic geometric types ([`geometry`] module)
//! - **Matrix**: Dense square matrices over a declared cell type ([`matrix::Matrix`])
//! - **Network**: Node and edge lists referencing nodes by identifier ([`network`] module)
//! - **Events**: Historical events, agents and their time spans ([`event`] module)

pub mod event;
pub mod geometry;
pub mod matrix;
pub mod network;
