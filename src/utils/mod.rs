//! Cross-cutting helpers shared by the pipelines.

pub mod parallel;
