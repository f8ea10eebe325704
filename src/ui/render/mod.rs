mod all;
mod apply;
mod board;
mod candidate;
mod footer;
mod log;
mod login;

pub use all::all as render;
