pub const MAX_ROWS: usize = 50;
pub const IDF_DECIMALS: i32 = 4;
