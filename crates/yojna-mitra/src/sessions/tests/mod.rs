mod common;
mod dialogue;
mod service;
