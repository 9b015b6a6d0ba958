//! Cash-flow analysis engine.
//!
//! Every operation here is a pure function of its inputs: the caller builds the inputs afresh
//! and recomputes everything on each change.

pub mod analysis;
pub mod cashflow;
pub mod chart;
pub mod npv;
pub mod period;
pub mod savings;
pub mod sensitivity;
