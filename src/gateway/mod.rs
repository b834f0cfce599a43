//! Record Gateway: the boundary between the screen and the REST backend.
//!
//! | Operation       | Method | Path               |
//! |-----------------|--------|--------------------|
//! | create          | POST   | `/create`          |
//! | update          | PUT    | `/{id}`            |
//! | deactivate      | PATCH  | `/{id}/inactivate` |
//! | activate        | PATCH  | `/activate/{id}`   |
//! | fetch one       | GET    | `/{id}`            |
//! | fetch all       | GET    | `/`                |
//! | fetch by status | GET    | `/active/{status}` |

mod client;
mod error;
mod worker;

pub use client::{normalize_base_url, RecordGateway};
pub use error::GatewayError;
pub use worker::{execute, GatewayCommand, GatewayCommandSender, GatewayEvent, GatewayWorker};
