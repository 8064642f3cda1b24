mod compensation;
mod operation;

pub use operation::{BumpOperation, BumpOutcome, BumpOutput, BumpRequest};
