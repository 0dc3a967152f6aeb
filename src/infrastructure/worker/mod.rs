//! Worker Layer - Background Task Processing
//!
//! 实现 SessionReaper，定期回收空闲的阅读会话

mod session_reaper;

pub use session_reaper::{SessionReaper, SessionReaperConfig};
