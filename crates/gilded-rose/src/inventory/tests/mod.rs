mod advance;
mod common;
