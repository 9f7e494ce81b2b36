mod parse_bad;
mod tree;
