mod month;
pub use month::*;
mod date;
pub use date::*;
mod year;
pub use year::*;
mod unix_time;
pub use unix_time::*;
