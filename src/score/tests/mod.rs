//! Score family tests.

mod hard_medium_soft_score;
mod trend;
