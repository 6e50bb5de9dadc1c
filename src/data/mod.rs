pub mod select;
pub mod split;
pub mod synth;
pub mod table;

pub use select::select_xy;
pub use split::{train_test_split, Split, SplitData};
pub use synth::{CarReading, SyntheticFleet};
pub use table::Table;
