pub mod range_counter;

pub use range_counter::FileRangeCounter;
