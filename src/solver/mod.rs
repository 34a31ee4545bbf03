pub mod engine;
pub mod grid;
pub mod heuristics;
pub mod instance;
pub mod search;
pub mod shape;
pub mod solution;
pub mod stats;
pub mod strategy;
