mod requests;
mod responses;

pub use requests::{AnalyzeRequest, CreatePostRequest, UpdatePostRequest};
pub use responses::AnalyzeResponse;
