use std::collections::HashMap;

use serde::Serialize;

#[derive(Debug, PartialEq, Clone, Serialize)]
pub struct Row {
    pub word: String,
    pub tf: TF,
    pub idf: IDF,
}

impl Row {
    pub const fn new(word: String, tf: TF, idf: IDF) -> Self {
        Self { word, tf, idf }
    }
}

pub type TF = f64;
pub type IDF = f64;

pub type TfMap = HashMap<String, TF>;
pub type IdfMap = HashMap<String, IDF>;

/// At most [`super::constants::MAX_ROWS`] rows, highest IDF first.
pub type RankedTable = Vec<Row>;
