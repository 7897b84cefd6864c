//! Value Object Module

pub mod pagination;
