pub mod mark;
