//! JSON records exchanged between the pipeline stages

mod bbox_file;
mod results;


pub use bbox_file::{BoundingBoxFile, BoxSelection};
pub use results::{ResultsFile, TimingResult};
