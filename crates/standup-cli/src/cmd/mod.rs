pub mod board;
pub mod issues;
pub mod people;
pub mod run;
pub mod serve;
