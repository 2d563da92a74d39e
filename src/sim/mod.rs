/// Simulated model run: a fixed roster walked by a timed step list.
///
/// Nothing here performs inference. Every step is a canned message with a
/// fixed hold, and every model is reported as succeeded.
pub mod driver;
pub mod roster;
pub mod schedule;
