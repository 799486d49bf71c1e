mod align;
mod highlighter;
mod style;
