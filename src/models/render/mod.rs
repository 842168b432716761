pub mod requests;
pub mod responses;

pub use requests::RenderLatexRequest;
pub use responses::RenderLatexResponse;
