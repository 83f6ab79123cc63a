//! Main module for tdoc library functionality

pub mod ast;
pub mod formats;
pub mod lexer;
pub mod parser;
pub mod processor;
pub mod resolver;
pub mod testing;
