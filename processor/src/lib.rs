// Process, once per batch:
// 1) Validate - check each component and its bound members against the platform types
// 2) Build - collect the valid members of each component into a binding model
// 3) Emit - turn each binding model into a code model, render it, hand it to the code sink

pub mod binding;
pub mod codegen;
pub mod config;
pub mod decl;
mod processor;
pub mod sink;
pub mod source;
pub mod validate;

pub use config::{ProcessorConfig, SignaturePolicy, ViewStyle};
pub use processor::{BatchReport, Processor};

#[cfg(test)]
mod fixtures;
