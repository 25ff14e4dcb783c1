//! Dual-month date-range selection for booking a stay.
//!
//! The [`calendar`] module holds everything needed to lay out two adjacent
//! months and to turn day clicks into a check-in/check-out range.  It knows
//! nothing about terminals; the `staypick` binary is one host for it.
pub mod calendar;
