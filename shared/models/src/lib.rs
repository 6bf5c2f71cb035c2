//! # VP Resource Metadata Models
//!
//! Record types produced from the EJP-RD Virtual Platform resource metadata
//! template. Each record maps one template row and is consumed as-is by the
//! publishing stage.
//!
//! ## Key Models
//!
//! - **Organisation**: an organisation with its pages and location
//! - **Biobank** / **PatientRegistry**: resources sharing one sheet, told apart by [`ResourceType`]
//! - **Dataset**: a dataset with themes, keywords and its VP connection
//! - **Distribution**: an access route to a dataset, linked by dataset title
//!
//! List fields are never absent: a blank template cell becomes an empty list.

pub mod organisation;
pub mod resource;
pub mod dataset;
pub mod distribution;

pub use organisation::*;
pub use resource::*;
pub use dataset::*;
pub use distribution::*;
