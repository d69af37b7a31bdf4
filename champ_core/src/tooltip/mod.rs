//! Tooltip engine - template tokenizing, placeholder resolution, rendering

mod renderer;
mod resolver;
mod token;
mod tokenizer;

pub use renderer::{render, RenderedTooltip, Segment};
pub use resolver::{resolve, Resolution, ResolutionRule};
pub use token::{Operator, Placeholder, PlaceholderOp, Token};
pub use tokenizer::tokenize;
