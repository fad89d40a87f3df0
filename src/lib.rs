pub mod api; // HTTP boundary: health check, analysis, symptom vocabulary
pub mod config;
pub mod dialogue; // Rule-based symptom dialogue engine
