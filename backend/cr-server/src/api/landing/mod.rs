pub mod landing;
pub mod landing_response;
