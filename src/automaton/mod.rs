mod eval;
mod label;
mod load;
mod model;

pub use eval::{Run, Verdict, split_symbols};
pub use label::Label;
pub use load::load_from_file;
#[cfg_attr(not(test), allow(unused_imports))]
pub use load::load_from_str;
pub use model::{Automaton, BuildOptions, RawAutomaton};
