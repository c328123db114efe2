/*
[INPUT]:  Calendar dates supplied by callers or the local clock
[OUTPUT]: Typed request parameters
[POS]:    Data layer - request parameter types
[UPDATE]: When operations gain new typed parameters
*/

pub mod period;

pub use period::{DATE_FORMAT, StatementPeriod, format_date};
