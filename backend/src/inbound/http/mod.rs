//! HTTP inbound adapter: routes, form DTO, and response rendering.

pub mod fragments;
pub mod leads;
pub mod pages;
pub mod redirects;
pub mod state;
