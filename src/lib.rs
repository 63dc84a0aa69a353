pub mod cli;
pub mod commit;
pub mod errors;
pub mod git;
pub mod suggest;
pub mod utils;
