pub mod nano_banana;
