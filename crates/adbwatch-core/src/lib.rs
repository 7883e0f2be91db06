//! adbwatch-core: pure log-tailing logic.
//! Timestamp extraction, the incremental tail cursor, and the clock port.
//! No process or network IO lives here.

pub mod clock;
pub mod tail;
pub mod timestamp;

pub use clock::{Clock, SystemClock};
pub use tail::{KeywordHit, LogTailer};
pub use timestamp::extract_timestamp;
