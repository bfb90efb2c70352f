//! Detection pipeline for dupscan.
//!
//! [`detect_duplicates`] is the whole tool in one call: scan the source tree
//! for parseable files, extract and fingerprint candidate blocks in parallel,
//! group blocks by fingerprint, and fold the qualifying groups into a
//! [`dupscan_types::DuplicateReport`]. [`write_report`] turns that report
//! into JSON or text on stdout or a file.

mod detect;
mod error;
mod output;
mod scan;

pub use detect::{detect_duplicates, DetectOptions, WORKER_STACK_SIZE};
pub use error::EngineError;
pub use output::{render_report, write_report};
pub use scan::scan_files;
