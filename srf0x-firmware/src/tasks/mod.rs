//! Embassy async tasks

pub mod ranger;

pub use ranger::{ranger_task, Ranger};
