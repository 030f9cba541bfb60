mod runs;

pub use runs::{Run, RunList};
