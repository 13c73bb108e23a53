pub mod nano_banana_response;
