//! Evaluates arithmetic expressions by converting them to Reverse Polish Notation
//! and reducing the result on a value stack.

pub mod interpreter;
