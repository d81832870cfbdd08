pub mod assignment;
pub mod evaluate;
pub mod lexer;
pub mod parser;
pub mod simplify;
pub mod solvers;
pub mod types;
