mod iupac;
pub use iupac::*;
