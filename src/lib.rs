pub mod document;
pub mod error;
pub mod pagination;
pub mod report;
pub mod session;
pub mod tf_idf;
pub mod tokenizer;

pub use error::{Error, Result};
pub use tf_idf::{
    row::{RankedTable, Row},
    DocumentFrequency, Options, TfIdf,
};
