//! KPI AHP - Priority synthesis for KPI corrective actions
//!
//! Ranks candidate corrective actions for fix-case KPIs with the Analytic
//! Hierarchy Process: pairwise judgments become eigenvector priorities,
//! each matrix gets a consistency verdict, and local priorities are
//! synthesized down the hierarchy into global scores.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
