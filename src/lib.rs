//! CRM Pro - Sales Relationship Tracker
//!
//! This crate implements the pipeline and dashboard core of a small CRM:
//! contacts, deals moving through sales stages, logged activities, and
//! generated company analyses, with aggregate metrics computed over the
//! entity store.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
