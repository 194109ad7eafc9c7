pub mod config;
pub mod errors;
pub mod handler;
pub mod response;
pub mod telemetry;

pub use config::{BodyEncoding, FunctionConfig};
pub use errors::{HandlerError, Result};
pub use handler::{handle, handle_with};
pub use response::{Body, ProxyResponse, ResponseBody};
