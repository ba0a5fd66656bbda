//! Detection and masking of positions whose mutations cluster inside (or
//! outside) one subtree.

pub mod chi2;
pub mod converge;
pub mod dispatch;
pub mod finder;
pub mod index;
pub mod masking;
pub mod options;
pub mod report;

pub use converge::{RoundReport, RunSummary, SplitMasker};
pub use dispatch::{scan_positions, scan_with, MaskDirectives};
pub use finder::{Direction, SplitDecision, SplitFinder, SubtreeVolumes};
pub use index::{MinCount, PositionIndex};
pub use masking::{apply_masks, MaskSummary};
pub use options::MaskingOptions;
pub use report::write_report;
