// Brandguard: keyword-based brand-safety validation.
//
// This is the library root. `validation` holds the matching and scoring
// logic; `web` is the HTTP surface around it.

pub mod config;
pub mod discovery;
pub mod output;
pub mod validation;
pub mod web;
