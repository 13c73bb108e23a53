pub mod data_uri;
pub mod multipart;
pub mod reqwest;
pub mod text;
pub mod time;
