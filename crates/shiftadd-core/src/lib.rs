#![forbid(unsafe_code)]

//! Core: the shift-and-add multiplication pipeline engine.
//!
//! # Role in shiftadd
//! `shiftadd-core` is the simulation layer. It owns the binary-number
//! representation, the per-item stage machine, and the discrete-time
//! scheduler that advances every in-flight pair one stage per tick while
//! recording full per-stage history.
//!
//! # Primary responsibilities
//! - **BinaryWord**: growable fixed-width binary values with padded and
//!   grouped rendering.
//! - **StageKind**: the explicit shift / multiply-add alternation, two
//!   stages per multiplier bit.
//! - **PipelineItem**: one multiplicand/multiplier pair, its running sum,
//!   and its append-only history.
//! - **PipelineScheduler**: the global clock and the tick loop.
//!
//! # How it fits in the system
//! The engine performs no input validation and raises no domain errors;
//! operands arrive pre-validated (non-negative, at most
//! [`OPERAND_BITS`](word::OPERAND_BITS) bits) from the CLI layer, which
//! also consumes the results and histories for rendering.

pub mod history;
pub mod item;
pub mod scheduler;
pub mod stage;
pub mod word;

pub use history::{ItemHistory, RECORD_BITS, StageRecord};
pub use item::PipelineItem;
pub use scheduler::PipelineScheduler;
pub use stage::{STAGE_COUNT, StageKind};
pub use word::{BinaryWord, OPERAND_BITS, ParseGroupedError};
