//! Precedent - Alert Similarity Scoring
//!
//! Finds resolved and dismissed alerts that resemble the one being triaged,
//! using keyword overlap of AI analyses and summaries together with category,
//! severity and device matches.

pub mod alert;
pub mod config;
pub mod digest;
pub mod error;
pub mod keywords;
pub mod rank;
pub mod score;
pub mod severity;
pub mod similarity;
pub mod store;

pub use alert::{Alert, AlertStatus, Analysis, Device};
pub use config::Config;
pub use digest::{top_keywords, DigestOptions};
pub use error::{PrecedentError, Result};
pub use rank::{find_similar, FindOptions, SimilarAlert};
pub use score::{breakdown, similarity, ScoreBreakdown, SubScore, Weights};
pub use severity::Severity;
