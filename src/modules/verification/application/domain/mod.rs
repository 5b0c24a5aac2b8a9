pub mod certificate;
pub mod collection;
pub mod entities;
pub mod phone;
pub mod unique_id;
