pub mod bytes;
pub mod read;
