//! uiforge - Generate a ready-to-use UI source file from an app description
//!
//! A single-call pipeline that prompts Google's Generative Language API for
//! a Next.js page component, extracts the source from the model response,
//! and persists it under the project root. Without an API key (or when the
//! API fails) the pipeline silently degrades to a deterministic hand-authored
//! template, so generation always yields a usable artifact.

pub mod config;
pub mod llm;
pub mod pipeline;
pub mod util;
pub mod validator;
pub mod writer;
