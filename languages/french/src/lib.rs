pub mod lexique;

pub use lexique::LexiqueFrequency;
